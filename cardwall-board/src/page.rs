//! BoardPage - owner of the board snapshot for one page view
//!
//! The page holds the only reference that is ever replaced: renderers clone the
//! `Arc` returned by [`BoardPage::snapshot`] and keep reading a consistent board
//! while the page swaps in a new one.

use crate::defaults::{NEW_CARD_CONTENT, NEW_CARD_TITLE, NEW_LIST_TITLE};
use crate::drag::session::{CompletedDrag, DragSession, DropHandler};
use crate::drag::zones::{self, DropZone, Point, ZoneLayout};
use crate::error::{BoardError, Result};
use crate::reorder::{IgnoreReason, PositionUpdate, ReorderEngine, ReorderOutcome};
use crate::service::{BoardService, CardChanges};
use crate::types::{BoardId, BoardSnapshot, CardEntry, CardId, DragItem, ListId, ZoneId};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What happened to a drop
#[derive(Debug)]
pub struct DropReport {
    /// Planning result. Errors mean the board was left untouched.
    pub outcome: Result<ReorderOutcome>,
    /// In-flight persistence call, present only when the item moved
    pub persist: Option<PersistHandle>,
}

impl DropReport {
    fn settled(outcome: Result<ReorderOutcome>) -> Self {
        Self {
            outcome,
            persist: None,
        }
    }
}

/// Handle on a background position update.
///
/// Dropping the handle does not cancel the call.
#[derive(Debug)]
pub struct PersistHandle {
    update: PositionUpdate,
    task: JoinHandle<Result<()>>,
}

impl PersistHandle {
    fn spawn<B: BoardService + 'static>(
        runtime: &Handle,
        backend: Arc<B>,
        update: PositionUpdate,
    ) -> Self {
        let task = runtime.spawn(async move {
            match backend.set_position(update).await {
                Ok(()) => {
                    info!(item = %update.item, position = update.position, "position persisted");
                    Ok(())
                }
                Err(e) => {
                    // Local order is kept; it may diverge from the server until reload
                    warn!(item = %update.item, position = update.position, error = %e, "position update failed");
                    Err(BoardError::Persistence {
                        item: update.item,
                        message: e.to_string(),
                    })
                }
            }
        });
        Self { update, task }
    }

    /// The update being persisted
    pub fn update(&self) -> &PositionUpdate {
        &self.update
    }

    /// Wait for the backend's answer
    pub async fn wait(self) -> Result<()> {
        self.task.await?
    }
}

struct PageDrop<'a, B> {
    snapshot: &'a mut Arc<BoardSnapshot>,
    engine: &'a ReorderEngine,
    backend: &'a Arc<B>,
}

impl<B: BoardService + 'static> DropHandler for PageDrop<'_, B> {
    type Output = DropReport;

    fn handle_drop(&mut self, drop: CompletedDrag) -> DropReport {
        match self.engine.plan(&self.snapshot, drop) {
            Ok(ReorderOutcome::Moved { snapshot, update }) => {
                let Ok(runtime) = Handle::try_current() else {
                    warn!(item = %drop.item, "no runtime to persist the move, board left as is");
                    return DropReport::settled(Err(BoardError::NoRuntime { item: drop.item }));
                };
                *self.snapshot = Arc::clone(&snapshot);
                let persist = PersistHandle::spawn(&runtime, Arc::clone(self.backend), update);
                DropReport {
                    outcome: Ok(ReorderOutcome::Moved { snapshot, update }),
                    persist: Some(persist),
                }
            }
            Ok(other) => {
                debug!(item = %drop.item, outcome = ?other, "drop left the board as is");
                DropReport::settled(Ok(other))
            }
            Err(e) => {
                warn!(item = %drop.item, error = %e, "drop rejected");
                DropReport::settled(Err(e))
            }
        }
    }
}

/// One open board: snapshot, drag session and backend
pub struct BoardPage<B> {
    board_id: BoardId,
    title: String,
    snapshot: Arc<BoardSnapshot>,
    session: DragSession,
    engine: ReorderEngine,
    backend: Arc<B>,
}

impl<B: BoardService + 'static> BoardPage<B> {
    /// Fetch board metadata and lists once and open the page
    pub async fn load(backend: Arc<B>, board_id: BoardId) -> Result<Self> {
        let summary = backend.fetch_board(board_id).await?;
        let snapshot = backend.fetch_lists(board_id).await?;
        debug!(board = %board_id, lists = snapshot.len(), "board loaded");
        Ok(Self::with_snapshot(backend, board_id, summary.title, snapshot))
    }

    /// Open a page over an already loaded snapshot
    pub fn with_snapshot(
        backend: Arc<B>,
        board_id: BoardId,
        title: impl Into<String>,
        snapshot: BoardSnapshot,
    ) -> Self {
        Self {
            board_id,
            title: title.into(),
            snapshot: Arc::new(snapshot),
            session: DragSession::new(),
            engine: ReorderEngine::new(),
            backend,
        }
    }

    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current board snapshot
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Drag session, for renderers deciding on visual affordances
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// List-level drop zones of the current snapshot
    pub fn list_zones(&self) -> Vec<DropZone> {
        zones::list_zones(&self.snapshot, &self.session)
    }

    /// Card-level drop zones of the list at `list_slot`
    pub fn card_zones(&self, list_slot: usize) -> Vec<DropZone> {
        zones::card_zones(&self.snapshot, list_slot, &self.session)
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Pointer pressed on a draggable item
    pub fn pointer_down(&mut self, item: DragItem) -> bool {
        self.session.begin_drag(item)
    }

    /// Pointer moved while dragging
    pub fn mark_moving(&mut self) {
        self.session.mark_moving();
    }

    /// Pointer moved to `point`; arms the zone of the dragged kind under it.
    ///
    /// Leaving every zone keeps the last armed one, so a release just outside a
    /// gap still lands in it.
    pub fn pointer_move(&mut self, point: Point, layout: &ZoneLayout) -> Option<ZoneId> {
        self.session.mark_moving();
        let kind = self.session.state().kind()?;
        let zone = layout.zone_at(point, kind)?;
        self.session.hover(zone).then_some(zone)
    }

    /// Pointer entered `zone`
    pub fn hover(&mut self, zone: ZoneId) -> bool {
        self.session.hover(zone)
    }

    /// Pointer released: reorder locally, start persisting, reset the session.
    ///
    /// Persisting a move is spawned on the current tokio runtime. Without one
    /// the move is refused with [`BoardError::NoRuntime`] and the board stays
    /// as it was.
    pub fn release(&mut self) -> DropReport {
        let Self {
            session,
            snapshot,
            engine,
            backend,
            ..
        } = self;

        let mut handler = PageDrop {
            snapshot,
            engine,
            backend,
        };
        session
            .complete_drag(&mut handler)
            .unwrap_or_else(|| DropReport::settled(Ok(ReorderOutcome::Ignored(IgnoreReason::NoDrag))))
    }

    /// Gesture ended without a drop (pointer left the window, escape, ...)
    pub fn cancel(&mut self) {
        self.session.cancel_drag();
    }

    // =========================================================================
    // Structural mutations
    // =========================================================================

    fn replace(&mut self, edit: impl FnOnce(&mut BoardSnapshot)) {
        let mut next = BoardSnapshot::clone(&self.snapshot);
        edit(&mut next);
        self.snapshot = Arc::new(next);
    }

    fn require_list(&self, id: ListId) -> Result<usize> {
        self.snapshot
            .list_index(id)
            .ok_or_else(|| BoardError::ListNotFound { id: id.to_string() })
    }

    fn require_card(&self, id: CardId) -> Result<(usize, usize)> {
        self.snapshot
            .locate_card(id)
            .ok_or_else(|| BoardError::CardNotFound { id: id.to_string() })
    }

    /// Rename the board
    pub async fn rename_board(&mut self, title: &str) -> Result<()> {
        self.backend.update_board_title(self.board_id, title).await?;
        self.title = title.to_string();
        Ok(())
    }

    /// Delete the board. The page is left empty and any drag is dropped.
    pub async fn delete_board(&mut self) -> Result<()> {
        self.backend.delete_board(self.board_id).await?;
        self.session.cancel_drag();
        self.snapshot = Arc::new(BoardSnapshot::default());
        info!(board = %self.board_id, "board deleted");
        Ok(())
    }

    /// Create a list at the end of the board
    pub async fn add_list(&mut self, title: Option<&str>) -> Result<ListId> {
        let list = self
            .backend
            .create_list(self.board_id, title.unwrap_or(NEW_LIST_TITLE))
            .await?;
        let id = list.id;
        self.replace(|board| board.lists.push(list));
        Ok(id)
    }

    /// Rename a list
    pub async fn rename_list(&mut self, id: ListId, title: &str) -> Result<()> {
        let index = self.require_list(id)?;
        self.backend.update_list_title(id, title).await?;
        self.replace(|board| board.lists[index].title = title.to_string());
        Ok(())
    }

    /// Delete a list with its cards
    pub async fn delete_list(&mut self, id: ListId) -> Result<()> {
        self.require_list(id)?;
        self.backend.delete_list(id).await?;
        self.replace(|board| board.lists.retain(|l| l.id != id));
        Ok(())
    }

    /// Create a card at the end of a list
    pub async fn add_card(
        &mut self,
        list: ListId,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<CardId> {
        let index = self.require_list(list)?;
        let card = self
            .backend
            .create_card(
                list,
                title.unwrap_or(NEW_CARD_TITLE),
                content.unwrap_or(NEW_CARD_CONTENT),
            )
            .await?;
        let id = card.id;
        self.replace(|board| board.lists[index].cards.push(card));
        Ok(id)
    }

    /// Change a card's title and/or content
    pub async fn update_card(&mut self, id: CardId, changes: &CardChanges) -> Result<()> {
        let (li, ci) = self.require_card(id)?;
        if changes.is_empty() {
            return Ok(());
        }
        let updated: CardEntry = self.backend.update_card(id, changes).await?;
        self.replace(|board| board.lists[li].cards[ci] = updated);
        Ok(())
    }

    /// Delete a card
    pub async fn delete_card(&mut self, id: CardId) -> Result<()> {
        let (li, ci) = self.require_card(id)?;
        self.backend.delete_card(id).await?;
        self.replace(|board| {
            board.lists[li].cards.remove(ci);
        });
        Ok(())
    }
}
