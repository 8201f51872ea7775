//! REST client for the cardwall board backend
//!
//! [`ApiClient`] speaks the backend's JSON API under `{base_url}/api/v1` and
//! implements [`cardwall_board::BoardService`], so a
//! [`BoardPage`](cardwall_board::BoardPage) can run directly against a server.

mod client;
mod error;
pub mod types;

pub use client::{ApiClient, API_PREFIX, SESSION_COOKIE};
pub use error::{ApiError, ApiResult};
pub use types::{BoardResponse, CardResponse, ListResponse, WorkspaceResponse};
