//! Identifier newtypes for backend entities
//!
//! The backend hands out integer ids. Wrapping them keeps a list id from being
//! passed where a card id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Get the raw backend id
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a workspace
    WorkspaceId
);
define_id!(
    /// Identifier of a board
    BoardId
);
define_id!(
    /// Identifier of a list on a board
    ListId
);
define_id!(
    /// Identifier of a card inside a list
    CardId
);
