//! Wire types of the board backend
//!
//! Timestamps are optional because not every endpoint returns them.

use cardwall_board::{
    BoardId, BoardSnapshot, BoardSummary, CardEntry, CardId, ListEntry, ListId, WorkspaceId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workspace with its boards, from `GET /workspaces`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkspaceResponse {
    pub id: WorkspaceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub boards: Vec<BoardResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkspacesResponse {
    pub workspaces: Vec<WorkspaceResponse>,
}

/// Board metadata
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardResponse {
    pub id: BoardId,
    #[serde(default)]
    pub workspace_id: Option<WorkspaceId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<BoardResponse> for BoardSummary {
    fn from(board: BoardResponse) -> Self {
        BoardSummary {
            id: board.id,
            workspace_id: board.workspace_id,
            title: board.title,
            description: board.description,
        }
    }
}

/// A list, with its cards when fetched through `GET /boards/{id}/lists`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListResponse {
    pub id: ListId,
    #[serde(default)]
    pub board_id: Option<BoardId>,
    pub title: String,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cards: Vec<CardResponse>,
}

impl From<ListResponse> for ListEntry {
    fn from(list: ListResponse) -> Self {
        ListEntry::new(list.id, list.title).with_cards(list.cards.into_iter().map(CardEntry::from))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListsResponse {
    pub lists: Vec<ListResponse>,
}

impl From<ListsResponse> for BoardSnapshot {
    fn from(response: ListsResponse) -> Self {
        BoardSnapshot::new(response.lists.into_iter().map(ListEntry::from).collect())
    }
}

/// A card
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CardResponse {
    pub id: CardId,
    #[serde(default)]
    pub list_id: Option<ListId>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CardResponse> for CardEntry {
    fn from(card: CardResponse) -> Self {
        CardEntry::new(card.id, card.title).with_content(card.content)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TitleRequest<'a> {
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateCardRequest<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

/// Body of a position PATCH. `list_id` re-parents a card and is sent only for
/// cross-list moves.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct PositionRequest {
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<ListId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lists_response_into_snapshot() {
        let body = json!({
            "lists": [
                {
                    "id": 1, "board_id": 7, "title": "Todo", "position": 1,
                    "created_at": "2024-03-01T10:00:00Z",
                    "updated_at": "2024-03-01T10:00:00.123456Z",
                    "cards": [
                        {"id": 10, "list_id": 1, "title": "a", "content": "x", "position": 1},
                        {"id": 11, "list_id": 1, "title": "b", "content": "", "position": 2}
                    ]
                },
                {"id": 2, "board_id": 7, "title": "Done", "position": 2, "cards": []}
            ]
        });

        let response: ListsResponse = serde_json::from_value(body).unwrap();
        let snapshot = BoardSnapshot::from(response);

        assert_eq!(snapshot.list_ids(), vec![ListId::from(1), ListId::from(2)]);
        assert_eq!(snapshot.lists[0].cards[0].content, "x");
        assert_eq!(snapshot.lists[0].card_ids(), vec![CardId::from(10), CardId::from(11)]);
        assert!(snapshot.lists[1].cards.is_empty());
    }

    #[test]
    fn test_list_without_cards_field() {
        let list: ListResponse = serde_json::from_value(json!({"id": 4, "title": "New list"})).unwrap();
        assert!(list.cards.is_empty());
        assert_eq!(ListEntry::from(list).title, "New list");
    }

    #[test]
    fn test_position_request_omits_list_for_same_list_moves() {
        let same = PositionRequest {
            position: 3,
            list_id: None,
        };
        assert_eq!(serde_json::to_value(&same).unwrap(), json!({"position": 3}));

        let cross = PositionRequest {
            position: 1,
            list_id: Some(ListId::from(9)),
        };
        assert_eq!(
            serde_json::to_value(&cross).unwrap(),
            json!({"position": 1, "list_id": 9})
        );
    }
}
