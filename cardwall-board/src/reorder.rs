//! Reorder engine: turns a finished drag into a new snapshot and one position update
//!
//! Slot indices are "insert before" positions computed against the sequence as
//! it was before the dragged item was taken out. Removing the item shifts every
//! later slot left by one, so a slot behind the item's original index is
//! decremented before inserting ([`corrected_slot`]). Slots at or before the
//! original index are unaffected.
//!
//! Cards moving to a different list are inserted at the slot as given: they
//! leave a sequence other than the one being indexed into.

use crate::drag::session::CompletedDrag;
use crate::error::{BoardError, Result};
use crate::types::{BoardSnapshot, CardId, DragItem, ItemKind, ListId, ZoneId};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The one remote write a successful reorder needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionUpdate {
    pub item: DragItem,
    /// 1-based position inside the destination sequence
    pub position: usize,
    /// Destination list, set only when a card moved to another list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListId>,
}

/// Why a drop left the board as it was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IgnoreReason {
    /// No drag was active when the pointer was released
    NoDrag,
    /// Released outside every armed zone
    NoZone,
    /// The zone belongs to the other level
    KindMismatch { item: ItemKind, zone: ItemKind },
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDrag => write!(f, "no drag in progress"),
            Self::NoZone => write!(f, "released outside every drop zone"),
            Self::KindMismatch { item, zone } => {
                write!(f, "a {} cannot be dropped into a {} zone", item, zone)
            }
        }
    }
}

/// Result of planning a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Nothing to do; the snapshot stays as is and nothing is persisted
    Ignored(IgnoreReason),
    /// Dropped into its own gap
    Unchanged,
    /// The item moved; `snapshot` replaces the current one
    Moved {
        snapshot: Arc<BoardSnapshot>,
        update: PositionUpdate,
    },
}

impl ReorderOutcome {
    /// Position update to persist, if the item moved
    pub fn update(&self) -> Option<&PositionUpdate> {
        match self {
            Self::Moved { update, .. } => Some(update),
            _ => None,
        }
    }

    /// Check if the drop changed the order
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Index an item lands on after being removed from `old` and dropped in front
/// of `slot`
pub fn corrected_slot(old: usize, slot: usize) -> usize {
    if slot > old {
        slot - 1
    } else {
        slot
    }
}

/// Move the item at `old` into the gap `slot` and return its new index.
///
/// Requires `old < seq.len()` and `slot <= seq.len()`.
pub fn move_item<T>(seq: &mut Vec<T>, old: usize, slot: usize) -> usize {
    let new = corrected_slot(old, slot);
    if new != old {
        let item = seq.remove(old);
        seq.insert(new, item);
    }
    new
}

/// Plans reorders against a snapshot without touching it
#[derive(Debug, Clone, Copy, Default)]
pub struct ReorderEngine;

impl ReorderEngine {
    pub fn new() -> Self {
        Self
    }

    /// Plan the effect of `drop` on `snapshot`.
    ///
    /// Structural problems (source gone, zone outside the board) are errors and
    /// leave nothing changed.
    pub fn plan(&self, snapshot: &BoardSnapshot, drop: CompletedDrag) -> Result<ReorderOutcome> {
        let Some(zone) = drop.zone else {
            return Ok(ReorderOutcome::Ignored(IgnoreReason::NoZone));
        };

        match (drop.item, zone) {
            (DragItem::List(id), ZoneId::List { slot }) => self.plan_list(snapshot, id, slot, zone),
            (
                DragItem::Card(id),
                ZoneId::Card {
                    list_slot,
                    card_slot,
                },
            ) => self.plan_card(snapshot, id, list_slot, card_slot, zone),
            (item, zone) => Ok(ReorderOutcome::Ignored(IgnoreReason::KindMismatch {
                item: item.kind(),
                zone: zone.kind(),
            })),
        }
    }

    fn plan_list(
        &self,
        snapshot: &BoardSnapshot,
        id: ListId,
        slot: usize,
        zone: ZoneId,
    ) -> Result<ReorderOutcome> {
        let old = snapshot
            .list_index(id)
            .ok_or_else(|| BoardError::source_not_found(DragItem::List(id)))?;

        if slot > snapshot.len() {
            return Err(BoardError::ZoneOutOfRange {
                zone,
                max: snapshot.len(),
            });
        }

        if corrected_slot(old, slot) == old {
            debug!(list = %id, old, slot, "list dropped into its own gap");
            return Ok(ReorderOutcome::Unchanged);
        }

        let mut next = snapshot.clone();
        let new = move_item(&mut next.lists, old, slot);
        debug!(list = %id, old, new, "list moved");

        Ok(ReorderOutcome::Moved {
            snapshot: Arc::new(next),
            update: PositionUpdate {
                item: DragItem::List(id),
                position: new + 1,
                list: None,
            },
        })
    }

    fn plan_card(
        &self,
        snapshot: &BoardSnapshot,
        id: CardId,
        list_slot: usize,
        card_slot: usize,
        zone: ZoneId,
    ) -> Result<ReorderOutcome> {
        let (old_list, old_card) = snapshot
            .locate_card(id)
            .ok_or_else(|| BoardError::source_not_found(DragItem::Card(id)))?;

        let Some(target) = snapshot.lists.get(list_slot) else {
            return Err(BoardError::ZoneOutOfRange {
                zone,
                max: snapshot.len().saturating_sub(1),
            });
        };
        if card_slot > target.cards.len() {
            return Err(BoardError::ZoneOutOfRange {
                zone,
                max: target.cards.len(),
            });
        }

        let mut next = snapshot.clone();
        let (new, list) = if list_slot == old_list {
            if corrected_slot(old_card, card_slot) == old_card {
                debug!(card = %id, old_card, card_slot, "card dropped into its own gap");
                return Ok(ReorderOutcome::Unchanged);
            }
            let new = move_item(&mut next.lists[list_slot].cards, old_card, card_slot);
            (new, None)
        } else {
            let card = next.lists[old_list].cards.remove(old_card);
            next.lists[list_slot].cards.insert(card_slot, card);
            (card_slot, Some(target.id))
        };

        debug!(
            card = %id,
            from = %snapshot.lists[old_list].id,
            to = %target.id,
            old_card,
            new,
            "card moved"
        );

        Ok(ReorderOutcome::Moved {
            snapshot: Arc::new(next),
            update: PositionUpdate {
                item: DragItem::Card(id),
                position: new + 1,
                list,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardEntry, ListEntry};

    fn lists(ids: &[u64]) -> BoardSnapshot {
        BoardSnapshot::new(
            ids.iter()
                .map(|&id| ListEntry::new(id, format!("list {}", id)))
                .collect(),
        )
    }

    fn two_lists() -> BoardSnapshot {
        BoardSnapshot::new(vec![
            ListEntry::new(ListId::from(1), "L1").with_cards([
                CardEntry::new(CardId::from(1), "c1"),
                CardEntry::new(CardId::from(2), "c2"),
            ]),
            ListEntry::new(ListId::from(2), "L2").with_cards([
                CardEntry::new(CardId::from(3), "c3"),
            ]),
        ])
    }

    fn drop_list(id: u64, slot: usize) -> CompletedDrag {
        CompletedDrag {
            item: DragItem::List(ListId::from(id)),
            zone: Some(ZoneId::list(slot)),
        }
    }

    fn drop_card(id: u64, list_slot: usize, card_slot: usize) -> CompletedDrag {
        CompletedDrag {
            item: DragItem::Card(CardId::from(id)),
            zone: Some(ZoneId::card(list_slot, card_slot)),
        }
    }

    fn raw_list_ids(board: &BoardSnapshot) -> Vec<u64> {
        board.list_ids().into_iter().map(ListId::get).collect()
    }

    fn raw_card_ids(board: &BoardSnapshot, list: usize) -> Vec<u64> {
        board.lists[list].card_ids().into_iter().map(CardId::get).collect()
    }

    fn moved(outcome: ReorderOutcome) -> (Arc<BoardSnapshot>, PositionUpdate) {
        match outcome {
            ReorderOutcome::Moved { snapshot, update } => (snapshot, update),
            other => panic!("expected a move, got {:?}", other),
        }
    }

    #[test]
    fn test_corrected_slot() {
        assert_eq!(corrected_slot(0, 3), 2);
        assert_eq!(corrected_slot(2, 0), 0);
        assert_eq!(corrected_slot(1, 1), 1);
        assert_eq!(corrected_slot(1, 2), 1);
    }

    #[test]
    fn test_move_item_first_to_last() {
        let mut seq = vec!['A', 'B', 'C'];
        assert_eq!(move_item(&mut seq, 0, 3), 2);
        assert_eq!(seq, vec!['B', 'C', 'A']);
    }

    #[test]
    fn test_move_item_last_to_first() {
        let mut seq = vec!['A', 'B', 'C'];
        assert_eq!(move_item(&mut seq, 2, 0), 0);
        assert_eq!(seq, vec!['C', 'A', 'B']);
    }

    #[test]
    fn test_list_first_to_last_slot() {
        let engine = ReorderEngine::new();
        let board = lists(&[1, 2, 3]);

        let (next, update) = moved(engine.plan(&board, drop_list(1, 3)).unwrap());
        assert_eq!(raw_list_ids(&next), vec![2, 3, 1]);
        assert_eq!(update.position, 3);
        assert_eq!(update.list, None);
        // input untouched
        assert_eq!(raw_list_ids(&board), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_last_to_first_slot() {
        let engine = ReorderEngine::new();
        let (next, update) = moved(engine.plan(&lists(&[1, 2, 3]), drop_list(3, 0)).unwrap());
        assert_eq!(raw_list_ids(&next), vec![3, 1, 2]);
        assert_eq!(update.position, 1);
    }

    #[test]
    fn test_list_drop_into_own_gaps_is_unchanged() {
        let engine = ReorderEngine::new();
        let board = lists(&[1, 2, 3]);
        assert_eq!(engine.plan(&board, drop_list(2, 1)).unwrap(), ReorderOutcome::Unchanged);
        assert_eq!(engine.plan(&board, drop_list(2, 2)).unwrap(), ReorderOutcome::Unchanged);
    }

    #[test]
    fn test_list_zone_out_of_range() {
        let engine = ReorderEngine::new();
        let result = engine.plan(&lists(&[1, 2]), drop_list(1, 5));
        assert!(matches!(result, Err(BoardError::ZoneOutOfRange { max: 2, .. })));
    }

    #[test]
    fn test_missing_list_source() {
        let engine = ReorderEngine::new();
        let result = engine.plan(&lists(&[1, 2]), drop_list(9, 0));
        assert!(matches!(result, Err(BoardError::ListNotFound { .. })));
    }

    #[test]
    fn test_cross_list_card_move_to_end() {
        let engine = ReorderEngine::new();
        let (next, update) = moved(engine.plan(&two_lists(), drop_card(1, 1, 1)).unwrap());

        assert_eq!(raw_card_ids(&next, 0), vec![2]);
        assert_eq!(raw_card_ids(&next, 1), vec![3, 1]);
        assert_eq!(update.position, 2);
        assert_eq!(update.list, Some(ListId::from(2)));
    }

    #[test]
    fn test_cross_list_card_move_is_not_corrected() {
        let engine = ReorderEngine::new();
        // c2 sits at index 1 of L1; slot 1 of L2 must stay slot 1
        let (next, update) = moved(engine.plan(&two_lists(), drop_card(2, 1, 1)).unwrap());
        assert_eq!(raw_card_ids(&next, 1), vec![3, 2]);
        assert_eq!(update.position, 2);
    }

    #[test]
    fn test_card_into_empty_list() {
        let engine = ReorderEngine::new();
        let mut board = two_lists();
        board.lists.push(ListEntry::new(ListId::from(3), "L3"));

        let (next, update) = moved(engine.plan(&board, drop_card(3, 2, 0)).unwrap());
        assert!(next.lists[1].cards.is_empty());
        assert_eq!(raw_card_ids(&next, 2), vec![3]);
        assert_eq!(update.position, 1);
    }

    #[test]
    fn test_same_list_card_move_down() {
        let engine = ReorderEngine::new();
        let (next, update) = moved(engine.plan(&two_lists(), drop_card(1, 0, 2)).unwrap());
        assert_eq!(raw_card_ids(&next, 0), vec![2, 1]);
        assert_eq!(update.position, 2);
        assert_eq!(update.list, None);
    }

    #[test]
    fn test_same_list_card_own_gap() {
        let engine = ReorderEngine::new();
        assert_eq!(
            engine.plan(&two_lists(), drop_card(1, 0, 1)).unwrap(),
            ReorderOutcome::Unchanged
        );
    }

    #[test]
    fn test_card_zone_out_of_range() {
        let engine = ReorderEngine::new();
        let board = two_lists();
        assert!(matches!(
            engine.plan(&board, drop_card(1, 4, 0)),
            Err(BoardError::ZoneOutOfRange { .. })
        ));
        assert!(matches!(
            engine.plan(&board, drop_card(1, 1, 3)),
            Err(BoardError::ZoneOutOfRange { max: 1, .. })
        ));
    }

    #[test]
    fn test_missing_card_source() {
        let engine = ReorderEngine::new();
        let result = engine.plan(&two_lists(), drop_card(42, 0, 0));
        assert!(matches!(result, Err(BoardError::CardNotFound { .. })));
    }

    #[test]
    fn test_no_zone_is_ignored() {
        let engine = ReorderEngine::new();
        let drop = CompletedDrag {
            item: DragItem::List(ListId::from(1)),
            zone: None,
        };
        assert_eq!(
            engine.plan(&lists(&[1]), drop).unwrap(),
            ReorderOutcome::Ignored(IgnoreReason::NoZone)
        );
    }

    #[test]
    fn test_kind_mismatch_is_ignored() {
        let engine = ReorderEngine::new();
        let drop = CompletedDrag {
            item: DragItem::List(ListId::from(1)),
            zone: Some(ZoneId::card(0, 0)),
        };
        assert!(matches!(
            engine.plan(&two_lists(), drop).unwrap(),
            ReorderOutcome::Ignored(IgnoreReason::KindMismatch {
                item: ItemKind::List,
                zone: ItemKind::Card,
            })
        ));
    }
}
