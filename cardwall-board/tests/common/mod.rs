//! In-memory backend shared by the board integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use cardwall_board::{
    BoardError, BoardId, BoardService, BoardSnapshot, BoardSummary, CardChanges, CardEntry,
    CardId, ListEntry, ListId, PositionUpdate, Result,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// Backend that records every call and can be told to fail or stall
pub struct RecordingBackend {
    pub title: String,
    pub lists: Mutex<BoardSnapshot>,
    pub positions: Mutex<Vec<PositionUpdate>>,
    pub calls: Mutex<Vec<String>>,
    pub fail: bool,
    /// When set, `set_position` waits for a permit before answering
    pub gate: Option<Semaphore>,
    next_id: AtomicU64,
}

impl RecordingBackend {
    pub fn new(snapshot: BoardSnapshot) -> Self {
        Self {
            title: "Test board".to_string(),
            lists: Mutex::new(snapshot),
            positions: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            fail: false,
            gate: None,
            next_id: AtomicU64::new(100),
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub fn position_updates(&self) -> Vec<PositionUpdate> {
        self.positions.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<()> {
        let call = call.into();
        self.calls.lock().unwrap().push(call.clone());
        if self.fail {
            return Err(BoardError::backend(call, "503 Service Unavailable"));
        }
        Ok(())
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl BoardService for RecordingBackend {
    async fn fetch_board(&self, board: BoardId) -> Result<BoardSummary> {
        self.record("fetch board")?;
        Ok(BoardSummary {
            id: board,
            workspace_id: None,
            title: self.title.clone(),
            description: String::new(),
        })
    }

    async fn fetch_lists(&self, _board: BoardId) -> Result<BoardSnapshot> {
        self.record("fetch lists")?;
        Ok(self.lists.lock().unwrap().clone())
    }

    async fn delete_board(&self, _board: BoardId) -> Result<()> {
        self.record("delete board")
    }

    async fn update_board_title(&self, _board: BoardId, _title: &str) -> Result<()> {
        self.record("update board")
    }

    async fn create_list(&self, _board: BoardId, title: &str) -> Result<ListEntry> {
        self.record("create list")?;
        Ok(ListEntry::new(ListId::from(self.next_id()), title))
    }

    async fn update_list_title(&self, _list: ListId, _title: &str) -> Result<()> {
        self.record("update list")
    }

    async fn delete_list(&self, _list: ListId) -> Result<()> {
        self.record("delete list")
    }

    async fn create_card(&self, _list: ListId, title: &str, content: &str) -> Result<CardEntry> {
        self.record("create card")?;
        Ok(CardEntry::new(CardId::from(self.next_id()), title).with_content(content))
    }

    async fn update_card(&self, card: CardId, changes: &CardChanges) -> Result<CardEntry> {
        self.record("update card")?;
        Ok(CardEntry::new(card, changes.title.clone().unwrap_or_default())
            .with_content(changes.content.clone().unwrap_or_default()))
    }

    async fn delete_card(&self, _card: CardId) -> Result<()> {
        self.record("delete card")
    }

    async fn set_position(&self, update: PositionUpdate) -> Result<()> {
        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.expect("gate closed");
        }
        self.positions.lock().unwrap().push(update);
        self.record("set position")
    }
}

/// L1 [c1, c2], L2 [c3]
pub fn two_lists() -> BoardSnapshot {
    BoardSnapshot::new(vec![
        ListEntry::new(ListId::from(1), "L1").with_cards([
            CardEntry::new(CardId::from(1), "c1"),
            CardEntry::new(CardId::from(2), "c2"),
        ]),
        ListEntry::new(ListId::from(2), "L2").with_cards([CardEntry::new(CardId::from(3), "c3")]),
    ])
}

/// Three empty lists A=1, B=2, C=3
pub fn three_lists() -> BoardSnapshot {
    BoardSnapshot::new(vec![
        ListEntry::new(ListId::from(1), "A"),
        ListEntry::new(ListId::from(2), "B"),
        ListEntry::new(ListId::from(3), "C"),
    ])
}
