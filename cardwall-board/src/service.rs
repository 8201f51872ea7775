//! Backend seam consumed by the board page

use crate::error::Result;
use crate::reorder::PositionUpdate;
use crate::types::{BoardId, BoardSnapshot, CardEntry, CardId, ListEntry, ListId, WorkspaceId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Board metadata shown above the lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: BoardId,
    #[serde(default)]
    pub workspace_id: Option<WorkspaceId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update of a card's text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CardChanges {
    /// Change the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Change the content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Check if nothing would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Remote operations the board page depends on.
///
/// Implementations report every failure as an error; the page decides what to
/// do with local state.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Board metadata
    async fn fetch_board(&self, board: BoardId) -> Result<BoardSummary>;

    /// Ordered lists of the board, each with its ordered cards
    async fn fetch_lists(&self, board: BoardId) -> Result<BoardSnapshot>;

    /// Delete the board with its lists and cards
    async fn delete_board(&self, board: BoardId) -> Result<()>;

    /// Rename the board
    async fn update_board_title(&self, board: BoardId, title: &str) -> Result<()>;

    /// Create a list at the end of the board
    async fn create_list(&self, board: BoardId, title: &str) -> Result<ListEntry>;

    /// Rename a list
    async fn update_list_title(&self, list: ListId, title: &str) -> Result<()>;

    /// Delete a list and its cards
    async fn delete_list(&self, list: ListId) -> Result<()>;

    /// Create a card at the end of a list
    async fn create_card(&self, list: ListId, title: &str, content: &str) -> Result<CardEntry>;

    /// Change a card's title and/or content
    async fn update_card(&self, card: CardId, changes: &CardChanges) -> Result<CardEntry>;

    /// Delete a card
    async fn delete_card(&self, card: CardId) -> Result<()>;

    /// Persist a new position produced by a reorder
    async fn set_position(&self, update: PositionUpdate) -> Result<()>;
}
