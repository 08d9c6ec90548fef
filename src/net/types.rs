//! Wire schema for the dog.ceo API and the fetch error taxonomy.
//!
//! Every dog.ceo response is an envelope of `{ "message": ..., "status": ... }`.
//! A `status` other than `"success"` is treated as a rejection even when the
//! HTTP layer reported success.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::{Map, Value};

const STATUS_SUCCESS: &str = "success";

/// Errors produced while talking to the breed API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The API envelope reported a non-success status.
    #[error("API rejected request: {0}")]
    Rejected(String),

    /// The image endpoint returned something that is not an image URL.
    #[error("invalid image URL: {0:?}")]
    InvalidImageUrl(String),

    /// No HTTP transport is compiled in (non-browser build).
    #[error("breed API not available outside the browser")]
    Unavailable,
}

/// Response of `GET /breeds/list/all`.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub message: Value,
    #[serde(default)]
    pub status: String,
}

/// Response of `GET /breed/{name}/images/random`.
#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    pub message: Value,
    #[serde(default)]
    pub status: String,
}

impl CatalogResponse {
    /// Breed names in the order the service listed them.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for a non-success envelope and `Decode` when
    /// `message` is not an object.
    pub fn into_breed_names(self) -> Result<Vec<String>, FetchError> {
        check_status(&self.status, &self.message)?;
        match self.message {
            Value::Object(map) => Ok(keys_in_order(map)),
            other => Err(FetchError::Decode(format!("catalog message is not an object: {other}"))),
        }
    }
}

impl ImageResponse {
    /// The image URL carried by the envelope.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for a non-success envelope and `InvalidImageUrl`
    /// when the message is not a non-empty http(s) URL.
    pub fn into_image_url(self) -> Result<String, FetchError> {
        check_status(&self.status, &self.message)?;
        match self.message {
            Value::String(url) if looks_like_image_url(&url) => Ok(url),
            Value::String(url) => Err(FetchError::InvalidImageUrl(url)),
            other => Err(FetchError::InvalidImageUrl(other.to_string())),
        }
    }
}

fn check_status(status: &str, message: &Value) -> Result<(), FetchError> {
    if status == STATUS_SUCCESS {
        return Ok(());
    }
    let detail = match message {
        Value::String(text) => text.clone(),
        _ if status.is_empty() => "missing status".to_owned(),
        _ => status.to_owned(),
    };
    Err(FetchError::Rejected(detail))
}

fn keys_in_order(map: Map<String, Value>) -> Vec<String> {
    map.into_iter().map(|(name, _)| name).collect()
}

fn looks_like_image_url(url: &str) -> bool {
    let url = url.trim();
    url.starts_with("https://") || url.starts_with("http://")
}
