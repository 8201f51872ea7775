//! Core types for the board engine

mod board;
mod ids;
mod kind;

// Re-export all types
pub use board::{BoardSnapshot, CardEntry, ListEntry};
pub use ids::{BoardId, CardId, ListId, WorkspaceId};
pub use kind::{DragItem, ItemKind, ZoneId};
