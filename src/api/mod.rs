//! linkding REST operations used by the command handlers.

mod client;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::payload::Payload;

pub use client::LinkdingClient;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid token: {0}")]
    Token(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error: status {status} body {body}")]
    Server { status: StatusCode, body: String },
    #[error("failed to parse response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Operations exposed by a linkding instance.
///
/// List operations take their filters as a [`Payload`]; write operations send the
/// payload as the request body.
#[async_trait]
pub trait LinkdingApi: Send + Sync {
    async fn bookmarks(&self, params: &Payload) -> Result<Value, ApiError>;

    async fn archived_bookmarks(&self, params: &Payload) -> Result<Value, ApiError>;

    async fn bookmark(&self, id: u64) -> Result<Value, ApiError>;

    async fn create_bookmark(&self, url: &str, payload: &Payload) -> Result<Value, ApiError>;

    async fn update_bookmark(&self, id: u64, payload: &Payload) -> Result<Value, ApiError>;

    async fn archive_bookmark(&self, id: u64) -> Result<(), ApiError>;

    async fn unarchive_bookmark(&self, id: u64) -> Result<(), ApiError>;

    async fn delete_bookmark(&self, id: u64) -> Result<(), ApiError>;

    async fn tags(&self, params: &Payload) -> Result<Value, ApiError>;

    async fn tag(&self, id: u64) -> Result<Value, ApiError>;

    async fn create_tag(&self, name: &str) -> Result<Value, ApiError>;

    async fn user_profile(&self) -> Result<Value, ApiError>;
}
