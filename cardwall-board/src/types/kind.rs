//! Drag kinds, dragged items and drop-zone identifiers

use super::ids::{CardId, ListId};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two orderable levels an item or zone belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    List,
    Card,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Card => f.write_str("card"),
        }
    }
}

/// The item picked up by a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DragItem {
    List(ListId),
    Card(CardId),
}

impl DragItem {
    /// Kind of the dragged item
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::List(_) => ItemKind::List,
            Self::Card(_) => ItemKind::Card,
        }
    }

    /// Raw backend id of the dragged item
    pub fn raw_id(&self) -> u64 {
        match self {
            Self::List(id) => id.get(),
            Self::Card(id) => id.get(),
        }
    }
}

impl fmt::Display for DragItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.raw_id())
    }
}

/// Identifier of a gap an item can be dropped into.
///
/// Slots use "insert before" semantics against the sequence as it looks before
/// the dragged item is removed: slot `i` is the gap in front of item `i`, and
/// slot `len` is the gap after the last item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ZoneId {
    /// Gap in front of list `slot`
    List { slot: usize },
    /// Gap in front of card `card_slot` inside list `list_slot`
    Card { list_slot: usize, card_slot: usize },
}

impl ZoneId {
    /// Zone in front of list `slot`
    pub fn list(slot: usize) -> Self {
        Self::List { slot }
    }

    /// Zone in front of card `card_slot` of list `list_slot`
    pub fn card(list_slot: usize, card_slot: usize) -> Self {
        Self::Card {
            list_slot,
            card_slot,
        }
    }

    /// Declared kind of the zone
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::List { .. } => ItemKind::List,
            Self::Card { .. } => ItemKind::Card,
        }
    }

    /// Check whether an item of `kind` may be dropped here
    pub fn accepts(&self, kind: ItemKind) -> bool {
        self.kind() == kind
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List { slot } => write!(f, "{}", slot),
            Self::Card {
                list_slot,
                card_slot,
            } => write!(f, "{}-{}", list_slot, card_slot),
        }
    }
}

impl FromStr for ZoneId {
    type Err = BoardError;

    /// Parse `"3"` as a list zone and `"1-2"` as a card zone
    fn from_str(s: &str) -> Result<Self> {
        let parse_slot = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| BoardError::invalid_zone(s, e.to_string()))
        };

        match s.split_once('-') {
            None => Ok(Self::list(parse_slot(s)?)),
            Some((list, card)) => Ok(Self::card(parse_slot(list)?, parse_slot(card)?)),
        }
    }
}
