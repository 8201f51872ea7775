//! Error types for the board engine

use crate::types::{DragItem, ZoneId};
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// List not found in the current snapshot
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Card not found in the current snapshot
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Drop zone points outside the structure it was dropped on
    #[error("drop zone {zone} is out of range (at most {max})")]
    ZoneOutOfRange { zone: ZoneId, max: usize },

    /// Drop zone text could not be parsed
    #[error("invalid drop zone '{input}': {message}")]
    InvalidZone { input: String, message: String },

    /// Backend call failed
    #[error("{operation} failed: {message}")]
    Backend { operation: String, message: String },

    /// Position update was rejected or never reached the backend
    #[error("persisting position of {item} failed: {message}")]
    Persistence { item: DragItem, message: String },

    /// A move was planned outside a tokio runtime, so it could not be persisted
    #[error("no tokio runtime to persist the position of {item}")]
    NoRuntime { item: DragItem },

    /// Background persistence task panicked or was cancelled
    #[error("persistence task did not complete: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl BoardError {
    /// Create a backend error
    pub fn backend(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an invalid zone error
    pub fn invalid_zone(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidZone {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Error for a drag source that is no longer on the board
    pub fn source_not_found(item: DragItem) -> Self {
        match item {
            DragItem::List(id) => Self::ListNotFound { id: id.to_string() },
            DragItem::Card(id) => Self::CardNotFound { id: id.to_string() },
        }
    }

    /// Check if this error came from the remote side and may succeed later
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Backend { .. } | Self::Persistence { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardId, ListId};

    #[test]
    fn test_error_display() {
        let err = BoardError::ListNotFound { id: "12".into() };
        assert_eq!(err.to_string(), "list not found: 12");
    }

    #[test]
    fn test_source_not_found_matches_kind() {
        let err = BoardError::source_not_found(DragItem::Card(CardId::from(4)));
        assert!(matches!(err, BoardError::CardNotFound { ref id } if id == "4"));

        let err = BoardError::source_not_found(DragItem::List(ListId::from(9)));
        assert!(matches!(err, BoardError::ListNotFound { ref id } if id == "9"));
    }

    #[test]
    fn test_zone_out_of_range_display() {
        let err = BoardError::ZoneOutOfRange {
            zone: ZoneId::card(1, 5),
            max: 3,
        };
        assert_eq!(err.to_string(), "drop zone 1-5 is out of range (at most 3)");
    }

    #[test]
    fn test_retryable() {
        assert!(BoardError::backend("create list", "503").is_retryable());
        assert!(!BoardError::CardNotFound { id: "x".into() }.is_retryable());
        assert!(!BoardError::NoRuntime {
            item: DragItem::List(ListId::from(1))
        }
        .is_retryable());
    }
}
