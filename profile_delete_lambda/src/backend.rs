//! Client for the upstream service that owns user profiles.
//!
//! A delete is a single `DELETE <backend_url>?user_id=<id>` carrying the
//! caller's bearer token. The call is attempted once and ends in either
//! success or a [`BackendError`].

use axum::http::{StatusCode, header};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend error: {body}")]
    Status { status: StatusCode, body: String },
    /// Connection failures, timeouts and unreadable bodies. The request URL
    /// is stripped so the configured endpoint never ends up in a message.
    #[error("{0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.without_url())
    }
}

pub trait ProfileBackend: Clone + Send + Sync + 'static {
    fn delete(
        &self,
        user_id: &str,
        auth_token: &str,
        backend_url: &str,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpProfileBackend {
    client: reqwest::Client,
}

impl HttpProfileBackend {
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ProfileBackend for HttpProfileBackend {
    async fn delete(
        &self,
        user_id: &str,
        auth_token: &str,
        backend_url: &str,
    ) -> Result<(), BackendError> {
        let response = self
            .client
            .delete(backend_url)
            .query(&[("user_id", user_id)])
            .bearer_auth(auth_token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(BackendError::Status { status, body });
        }

        Ok(())
    }
}
