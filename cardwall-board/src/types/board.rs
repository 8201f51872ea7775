//! Board snapshot types: BoardSnapshot, ListEntry, CardEntry

use super::ids::{CardId, ListId};
use serde::{Deserialize, Serialize};

/// A card inside a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl CardEntry {
    /// Create a new card entry
    pub fn new(id: impl Into<CardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
        }
    }

    /// Set the card content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// A list on the board. The order of `cards` is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<CardEntry>,
}

impl ListEntry {
    /// Create a new, empty list entry
    pub fn new(id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Append cards to the list
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = CardEntry>) -> Self {
        self.cards.extend(cards);
        self
    }

    /// Index of the card with `id` in this list
    pub fn card_index(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Card ids in display order
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }
}

/// Ordered lists of one board, loaded once per page view.
///
/// The page keeps the snapshot behind an `Arc` and never edits it in place:
/// every mutation clones it, edits the clone, and swaps the `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub lists: Vec<ListEntry>,
}

impl BoardSnapshot {
    /// Create a snapshot from lists in display order
    pub fn new(lists: Vec<ListEntry>) -> Self {
        Self { lists }
    }

    /// Number of lists
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Check if the board has no lists
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Index of the list with `id`
    pub fn list_index(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|l| l.id == id)
    }

    /// Find a list by id
    pub fn find_list(&self, id: ListId) -> Option<&ListEntry> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// `(list index, card index)` of the card with `id`
    pub fn locate_card(&self, id: CardId) -> Option<(usize, usize)> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(li, list)| list.card_index(id).map(|ci| (li, ci)))
    }

    /// Find a card by id
    pub fn find_card(&self, id: CardId) -> Option<&CardEntry> {
        self.locate_card(id)
            .map(|(li, ci)| &self.lists[li].cards[ci])
    }

    /// List ids in display order
    pub fn list_ids(&self) -> Vec<ListId> {
        self.lists.iter().map(|l| l.id).collect()
    }

    /// Every card id on the board, list by list
    pub fn card_ids(&self) -> Vec<CardId> {
        self.lists.iter().flat_map(|l| l.card_ids()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoardSnapshot {
        BoardSnapshot::new(vec![
            ListEntry::new(ListId::from(1), "Todo").with_cards([
                CardEntry::new(CardId::from(10), "a"),
                CardEntry::new(CardId::from(11), "b"),
            ]),
            ListEntry::new(ListId::from(2), "Done").with_cards([
                CardEntry::new(CardId::from(20), "c"),
            ]),
        ])
    }

    #[test]
    fn test_locate_card() {
        let board = sample();
        assert_eq!(board.locate_card(CardId::from(11)), Some((0, 1)));
        assert_eq!(board.locate_card(CardId::from(20)), Some((1, 0)));
        assert_eq!(board.locate_card(CardId::from(99)), None);
    }

    #[test]
    fn test_list_index() {
        let board = sample();
        assert_eq!(board.list_index(ListId::from(2)), Some(1));
        assert_eq!(board.list_index(ListId::from(3)), None);
    }

    #[test]
    fn test_card_ids_in_board_order() {
        let ids: Vec<u64> = sample().card_ids().into_iter().map(|c| c.get()).collect();
        assert_eq!(ids, vec![10, 11, 20]);
    }

    #[test]
    fn test_snapshot_deserializes_without_cards() {
        let json = r#"{"lists":[{"id":5,"title":"Empty"}]}"#;
        let board: BoardSnapshot = serde_json::from_str(json).unwrap();
        assert!(board.lists[0].cards.is_empty());
    }
}
