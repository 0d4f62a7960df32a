//! REST client for the listings endpoints

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::types::Book;
use crate::{auth, config};

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API base URL is not configured. Set API_BASE_URL and rebuild.")]
    Config,

    /// 401 from the backend; the caller should send the user to login.
    #[error("{0}")]
    Unauthorized(String),

    /// Any other non-2xx response, message extracted from the body.
    #[error("{0}")]
    Http(String),

    #[error("Network error: could not reach the server")]
    Network,
}

/// Shape of the backend's error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Successful listings payload.
#[derive(Debug, Deserialize)]
struct MyBooksBody {
    #[serde(default)]
    books: Vec<Book>,
}

/// PATCH body for the sold-status endpoint.
#[derive(Debug, Serialize)]
struct SoldStatusPatch<'a> {
    soldstatus: &'a str,
}

/// Client for making authenticated requests to the listings API
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new client for the given API base URL
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
            token: None,
        }
    }

    /// Attach a bearer token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Build a client from app configuration and the session credential.
    ///
    /// The credential is read fresh on every call so external logins and
    /// logouts take effect immediately.
    pub fn from_session() -> Result<Self, ApiError> {
        let base = config::api_base().ok_or(ApiError::Config)?;
        Ok(Self::new(base).with_token(auth::read_token()))
    }

    /// Fetch the caller's listings: GET `{base}/user/mybooks`.
    ///
    /// A 2xx response with a missing or malformed `books` field degrades
    /// to an empty list rather than an error.
    pub async fn my_books(&self) -> Result<Vec<Book>, ApiError> {
        let mut req = self.client.get(format!("{}/user/mybooks", self.base));
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let response = req.send().await.map_err(|err| {
            tracing::warn!("listings fetch failed before a response: {err}");
            ApiError::Network
        })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        Ok(parse_books(&body))
    }

    /// Toggle a listing's sold status: PATCH `{base}/books/{id}/sold`.
    pub async fn set_sold_status(&self, id: &str, next_status: &str) -> Result<(), ApiError> {
        let mut req = self
            .client
            .patch(format!("{}/books/{}/sold", self.base, id))
            .json(&SoldStatusPatch {
                soldstatus: next_status,
            });
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let response = req.send().await.map_err(|err| {
            tracing::warn!("sold-status update failed before a response: {err}");
            ApiError::Network
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        Ok(())
    }
}

/// Map a non-2xx response to an error with a human-readable message.
fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = error_message(status, body);
    if status == StatusCode::UNAUTHORIZED {
        ApiError::Unauthorized(message)
    } else {
        ApiError::Http(message)
    }
}

/// Extract a display message from an error body.
///
/// Prefers the `error` field, then `message`, then a generic
/// status-coded fallback. Empty strings do not count.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| non_empty(b.error).or_else(|| non_empty(b.message)))
        .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()))
}

/// Empty and whitespace-only fields count as absent, so a blank
/// `error` still falls through to `message`.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|m| !m.trim().is_empty())
}

/// Parse a 2xx listings body, degrading malformed payloads to empty.
fn parse_books(body: &str) -> Vec<Book> {
    serde_json::from_str::<MyBooksBody>(body)
        .map(|b| b.books)
        .unwrap_or_default()
}
