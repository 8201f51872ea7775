//! HTTP client for the board backend

use crate::error::{extract_error_message, ApiError, ApiResult};
use crate::types::*;
use async_trait::async_trait;
use cardwall_board::{
    BoardId, BoardService, BoardSnapshot, BoardSummary, CardChanges, CardEntry, CardId, DragItem,
    ListEntry, ListId, PositionUpdate,
};
use cardwall_config::ApiSettings;
use reqwest::{header, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Path prefix of every endpoint
pub const API_PREFIX: &str = "/api/v1";

/// Name of the session cookie the server authenticates with
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// Client for the board backend's REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl ApiClient {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url)?,
            session_cookie: None,
        })
    }

    /// Create a client from configuration
    pub fn from_settings(settings: &ApiSettings) -> ApiResult<Self> {
        let client = Self::http_client(settings.timeout())?;
        Ok(Self {
            client,
            base_url: normalize_base_url(&settings.base_url)?,
            session_cookie: settings.session_cookie.clone(),
        })
    }

    fn http_client(timeout: Duration) -> ApiResult<Client> {
        Ok(Client::builder().timeout(timeout).build()?)
    }

    /// Attach a session cookie to every request
    pub fn with_session_cookie(mut self, value: impl Into<String>) -> Self {
        self.session_cookie = Some(value.into());
        self
    }

    /// Server root, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        debug!(%method, %url, "backend request");
        let request = self.client.request(method, url);
        match &self.session_cookie {
            Some(value) => request.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, value)),
            None => request,
        }
    }

    /// Map an HTTP response to an `ApiError` unless it has the `expected` status
    async fn check_response(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status == expected {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);

        match status.as_u16() {
            401 => Err(ApiError::Unauthorized(message)),
            404 => Err(ApiError::NotFound(message)),
            code => Err(ApiError::Status {
                status: code,
                body: message,
            }),
        }
    }

    async fn send(
        &self,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> ApiResult<reqwest::Response> {
        let response = request.send().await?;
        self.check_response(response, expected).await
    }

    /// Send a request answered with `200 OK` and a JSON body
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.send(request, StatusCode::OK).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // -- Reads --

    /// Workspaces visible to the session, each with its boards
    pub async fn workspaces(&self) -> ApiResult<Vec<WorkspaceResponse>> {
        let response: WorkspacesResponse = self
            .send_json(self.request(Method::GET, "/workspaces"))
            .await?;
        Ok(response.workspaces)
    }

    /// Board metadata
    pub async fn board(&self, id: BoardId) -> ApiResult<BoardResponse> {
        self.send_json(self.request(Method::GET, &format!("/boards/{}", id)))
            .await
    }

    /// Lists of a board in display order, each with its cards
    pub async fn board_lists(&self, id: BoardId) -> ApiResult<Vec<ListResponse>> {
        let response: ListsResponse = self
            .send_json(self.request(Method::GET, &format!("/boards/{}/lists", id)))
            .await?;
        Ok(response.lists)
    }

    /// A single card
    pub async fn card(&self, id: CardId) -> ApiResult<CardResponse> {
        self.send_json(self.request(Method::GET, &format!("/cards/{}", id)))
            .await
    }

    // -- Writes --

    /// Delete a board with its lists and cards
    pub async fn delete_board(&self, id: BoardId) -> ApiResult<()> {
        self.send(
            self.request(Method::DELETE, &format!("/boards/{}", id)),
            StatusCode::NO_CONTENT,
        )
        .await?;
        info!(board = %id, "board deleted");
        Ok(())
    }

    /// Rename a board
    pub async fn rename_board(&self, id: BoardId, title: &str) -> ApiResult<()> {
        let request = self
            .request(Method::PATCH, &format!("/boards/{}", id))
            .json(&TitleRequest { title });
        self.send(request, StatusCode::OK).await?;
        info!(board = %id, "board renamed");
        Ok(())
    }

    /// Append a list to a board
    pub async fn create_list(&self, board: BoardId, title: &str) -> ApiResult<ListResponse> {
        let request = self
            .request(Method::POST, &format!("/boards/{}/lists", board))
            .json(&TitleRequest { title });
        let list: ListResponse = self.send_json(request).await?;
        info!(board = %board, list = %list.id, "list created");
        Ok(list)
    }

    /// Rename a list
    pub async fn rename_list(&self, id: ListId, title: &str) -> ApiResult<()> {
        let request = self
            .request(Method::PATCH, &format!("/lists/{}", id))
            .json(&TitleRequest { title });
        self.send(request, StatusCode::OK).await?;
        info!(list = %id, "list renamed");
        Ok(())
    }

    /// Delete a list and its cards
    pub async fn delete_list(&self, id: ListId) -> ApiResult<()> {
        self.send(
            self.request(Method::DELETE, &format!("/lists/{}", id)),
            StatusCode::NO_CONTENT,
        )
        .await?;
        info!(list = %id, "list deleted");
        Ok(())
    }

    /// Move a list to the 1-based `position`
    pub async fn set_list_position(&self, id: ListId, position: usize) -> ApiResult<()> {
        let request = self
            .request(Method::PATCH, &format!("/lists/{}", id))
            .json(&PositionRequest {
                position,
                list_id: None,
            });
        self.send(request, StatusCode::OK).await?;
        info!(list = %id, position, "list position updated");
        Ok(())
    }

    /// Append a card to a list
    pub async fn create_card(
        &self,
        list: ListId,
        title: &str,
        content: &str,
    ) -> ApiResult<CardResponse> {
        let request = self
            .request(Method::POST, &format!("/lists/{}/cards", list))
            .json(&CreateCardRequest { title, content });
        let card: CardResponse = self.send_json(request).await?;
        info!(list = %list, card = %card.id, "card created");
        Ok(card)
    }

    /// Change a card's title and/or content
    pub async fn update_card(&self, id: CardId, changes: &CardChanges) -> ApiResult<CardResponse> {
        let request = self
            .request(Method::PATCH, &format!("/cards/{}", id))
            .json(changes);
        let card = self.send_json(request).await?;
        info!(card = %id, "card updated");
        Ok(card)
    }

    /// Delete a card
    pub async fn delete_card(&self, id: CardId) -> ApiResult<()> {
        self.send(
            self.request(Method::DELETE, &format!("/cards/{}", id)),
            StatusCode::NO_CONTENT,
        )
        .await?;
        info!(card = %id, "card deleted");
        Ok(())
    }

    /// Move a card to the 1-based `position`, re-parenting it when `list` is set
    pub async fn set_card_position(
        &self,
        id: CardId,
        position: usize,
        list: Option<ListId>,
    ) -> ApiResult<()> {
        let request = self
            .request(Method::PATCH, &format!("/cards/{}", id))
            .json(&PositionRequest {
                position,
                list_id: list,
            });
        self.send(request, StatusCode::OK).await?;
        info!(card = %id, position, "card position updated");
        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let invalid = |message: String| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        message,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[async_trait]
impl BoardService for ApiClient {
    async fn fetch_board(&self, board: BoardId) -> cardwall_board::Result<BoardSummary> {
        self.board(board)
            .await
            .map(BoardSummary::from)
            .map_err(|e| e.into_board_error("fetch board"))
    }

    async fn fetch_lists(&self, board: BoardId) -> cardwall_board::Result<BoardSnapshot> {
        self.board_lists(board)
            .await
            .map(|lists| BoardSnapshot::new(lists.into_iter().map(ListEntry::from).collect()))
            .map_err(|e| e.into_board_error("fetch lists"))
    }

    async fn delete_board(&self, board: BoardId) -> cardwall_board::Result<()> {
        ApiClient::delete_board(self, board)
            .await
            .map_err(|e| e.into_board_error("delete board"))
    }

    async fn update_board_title(&self, board: BoardId, title: &str) -> cardwall_board::Result<()> {
        self.rename_board(board, title)
            .await
            .map_err(|e| e.into_board_error("rename board"))
    }

    async fn create_list(&self, board: BoardId, title: &str) -> cardwall_board::Result<ListEntry> {
        ApiClient::create_list(self, board, title)
            .await
            .map(ListEntry::from)
            .map_err(|e| e.into_board_error("create list"))
    }

    async fn update_list_title(&self, list: ListId, title: &str) -> cardwall_board::Result<()> {
        self.rename_list(list, title)
            .await
            .map_err(|e| e.into_board_error("rename list"))
    }

    async fn delete_list(&self, list: ListId) -> cardwall_board::Result<()> {
        ApiClient::delete_list(self, list)
            .await
            .map_err(|e| e.into_board_error("delete list"))
    }

    async fn create_card(
        &self,
        list: ListId,
        title: &str,
        content: &str,
    ) -> cardwall_board::Result<CardEntry> {
        ApiClient::create_card(self, list, title, content)
            .await
            .map(CardEntry::from)
            .map_err(|e| e.into_board_error("create card"))
    }

    async fn update_card(
        &self,
        card: CardId,
        changes: &CardChanges,
    ) -> cardwall_board::Result<CardEntry> {
        ApiClient::update_card(self, card, changes)
            .await
            .map(CardEntry::from)
            .map_err(|e| e.into_board_error("update card"))
    }

    async fn delete_card(&self, card: CardId) -> cardwall_board::Result<()> {
        ApiClient::delete_card(self, card)
            .await
            .map_err(|e| e.into_board_error("delete card"))
    }

    async fn set_position(&self, update: PositionUpdate) -> cardwall_board::Result<()> {
        match update.item {
            DragItem::List(id) => self
                .set_list_position(id, update.position)
                .await
                .map_err(|e| e.into_board_error("update list position")),
            DragItem::Card(id) => self
                .set_card_position(id, update.position, update.list)
                .await
                .map_err(|e| e.into_board_error("update card position")),
        }
    }
}
