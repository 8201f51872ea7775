//! Property tests for the reorder engine

use cardwall_board::reorder::{corrected_slot, move_item};
use cardwall_board::{
    BoardSnapshot, CardEntry, CardId, CompletedDrag, DragItem, ListEntry, ListId,
    ReorderEngine, ReorderOutcome, ZoneId,
};
use proptest::prelude::*;

/// Boards with 1..5 lists of 0..5 cards, ids unique across the board
fn board_strategy() -> impl Strategy<Value = BoardSnapshot> {
    prop::collection::vec(0usize..5, 1..5).prop_map(|sizes| {
        let mut next_card = 0u64;
        let lists = sizes
            .into_iter()
            .enumerate()
            .map(|(li, size)| {
                let cards = (0..size).map(|_| {
                    next_card += 1;
                    CardEntry::new(CardId::from(next_card), format!("card {}", next_card))
                });
                ListEntry::new(ListId::from(li as u64 + 1), format!("list {}", li)).with_cards(cards.collect::<Vec<_>>())
            })
            .collect();
        BoardSnapshot::new(lists)
    })
}

fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort();
    v
}

proptest! {
    #[test]
    fn move_item_is_a_permutation(len in 1usize..12, old_seed in any::<usize>(), slot_seed in any::<usize>()) {
        let seq: Vec<usize> = (0..len).collect();
        let old = old_seed % len;
        let slot = slot_seed % (len + 1);

        let mut moved = seq.clone();
        let new = move_item(&mut moved, old, slot);

        prop_assert_eq!(moved.len(), seq.len());
        prop_assert_eq!(sorted(moved.clone()), seq.clone());
        prop_assert_eq!(moved[new], seq[old]);
    }

    #[test]
    fn drop_behind_own_position_is_noop(len in 1usize..12, old_seed in any::<usize>()) {
        let seq: Vec<usize> = (0..len).collect();
        let old = old_seed % len;

        let mut moved = seq.clone();
        let new = move_item(&mut moved, old, old + 1);

        prop_assert_eq!(new, old);
        prop_assert_eq!(moved, seq);
        prop_assert_eq!(corrected_slot(old, old), old);
    }

    #[test]
    fn list_reorder_preserves_lists(board in board_strategy(), pick in any::<usize>(), slot_seed in any::<usize>()) {
        let engine = ReorderEngine::new();
        let id = board.lists[pick % board.len()].id;
        let slot = slot_seed % (board.len() + 1);
        let drop = CompletedDrag { item: DragItem::List(id), zone: Some(ZoneId::list(slot)) };

        match engine.plan(&board, drop).unwrap() {
            ReorderOutcome::Moved { snapshot, update } => {
                prop_assert_eq!(sorted(snapshot.list_ids()), sorted(board.list_ids()));
                prop_assert_eq!(sorted(snapshot.card_ids()), sorted(board.card_ids()));
                prop_assert_eq!(snapshot.lists[update.position - 1].id, id);
            }
            ReorderOutcome::Unchanged => {
                let old = board.list_index(id).unwrap();
                prop_assert_eq!(corrected_slot(old, slot), old);
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn card_reorder_preserves_cards(board in board_strategy(), pick in any::<usize>(), list_seed in any::<usize>(), slot_seed in any::<usize>()) {
        let cards = board.card_ids();
        prop_assume!(!cards.is_empty());

        let engine = ReorderEngine::new();
        let id = cards[pick % cards.len()];
        let list_slot = list_seed % board.len();
        let card_slot = slot_seed % (board.lists[list_slot].cards.len() + 1);
        let drop = CompletedDrag { item: DragItem::Card(id), zone: Some(ZoneId::card(list_slot, card_slot)) };

        match engine.plan(&board, drop).unwrap() {
            ReorderOutcome::Moved { snapshot, update } => {
                prop_assert_eq!(snapshot.list_ids(), board.list_ids());
                prop_assert_eq!(sorted(snapshot.card_ids()), sorted(cards.clone()));
                prop_assert_eq!(snapshot.lists[list_slot].cards[update.position - 1].id, id);
                let old_list = board.locate_card(id).unwrap().0;
                prop_assert_eq!(update.list.is_some(), old_list != list_slot);
            }
            ReorderOutcome::Unchanged => {
                prop_assert_eq!(board.locate_card(id).unwrap().0, list_slot);
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }
}
