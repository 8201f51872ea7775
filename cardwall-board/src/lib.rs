//! Drag-and-drop positioning engine for a kanban board editor
//!
//! A board is an ordered sequence of lists, each holding an ordered sequence of
//! cards. The order of a sequence IS the position: there is no rank field that
//! local rendering trusts. This crate tracks one drag gesture at a time, turns the
//! finished gesture into a new board snapshot, and emits the single position
//! update the backend needs to persist it.
//!
//! ## Overview
//!
//! - [`DragSession`] - transient state of the gesture in progress (dragged item,
//!   pointer movement, hovered drop zone). Empty between gestures.
//! - [`ReorderEngine`] - pure planner: finished gesture + snapshot in, new
//!   snapshot + [`PositionUpdate`] out.
//! - [`drag::zones`] - drop-zone enumeration and pointer hit-testing.
//! - [`BoardPage`] - owns the snapshot and wires the pieces to a [`BoardService`].
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use cardwall_board::{BoardId, BoardPage, BoardService, DragItem, ListId, ZoneId};
//! use std::sync::Arc;
//!
//! # async fn example(backend: Arc<impl BoardService + 'static>) -> cardwall_board::Result<()> {
//! let mut page = BoardPage::load(backend, BoardId::from(7)).await?;
//!
//! // Drag the list with id 3 in front of the first list
//! page.pointer_down(DragItem::List(ListId::from(3)));
//! page.mark_moving();
//! page.hover(ZoneId::list(0));
//! let report = page.release();
//!
//! // The snapshot is already reordered; persistence runs in the background
//! if let Some(persist) = report.persist {
//!     persist.wait().await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod defaults;
pub mod drag;
mod error;
mod page;
pub mod reorder;
mod service;
pub mod types;

pub use drag::session::{CompletedDrag, DragSession, DragState, DropHandler};
pub use drag::zones::{Axis, DropZone, Point, Rect, ZoneLayout};
pub use error::{BoardError, Result};
pub use page::{BoardPage, DropReport, PersistHandle};
pub use reorder::{IgnoreReason, PositionUpdate, ReorderEngine, ReorderOutcome};
pub use service::{BoardService, BoardSummary, CardChanges};

// Re-export commonly used types
pub use types::{
    BoardId, BoardSnapshot, CardEntry, CardId, DragItem, ItemKind, ListEntry, ListId,
    WorkspaceId, ZoneId,
};
