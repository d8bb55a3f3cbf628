//! Error types for the showfinder widget
//!
//! Provides one error enum shared by the client, the normalizers, the
//! renderer and the widget, with Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::types::ShowId;

/// Error type for all showfinder operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum ShowfinderError {
    /// Network or transport failure
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Invalid base URL or endpoint
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Rate limited by the API (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Endpoint answered 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Template rendering failed
    #[error("Failed to render page fragment: {0}")]
    RenderError(String),

    /// Episodes were requested for a show that is not on the page
    #[error("Show {0} is not in the current search results")]
    UnknownShow(ShowId),
}

impl From<askama::Error> for ShowfinderError {
    fn from(error: askama::Error) -> Self {
        ShowfinderError::RenderError(error.to_string())
    }
}

impl From<serde_json::Error> for ShowfinderError {
    fn from(error: serde_json::Error) -> Self {
        ShowfinderError::ParseError(error.to_string())
    }
}

impl Serialize for ShowfinderError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for showfinder operations
pub type Result<T> = std::result::Result<T, ShowfinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse_error() {
        let error = ShowfinderError::ParseError("missing field `id`".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to parse API response: missing field `id`"
        );
    }

    #[test]
    fn test_error_display_unexpected_status() {
        let error = ShowfinderError::UnexpectedStatus {
            status: 503,
            url: "https://api.tvmaze.com/search/shows?q=batman".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected HTTP status 503 from https://api.tvmaze.com/search/shows?q=batman"
        );
    }

    #[test]
    fn test_error_display_unknown_show() {
        let error = ShowfinderError::UnknownShow(ShowId(139));
        assert_eq!(
            error.to_string(),
            "Show 139 is not in the current search results"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let error = ShowfinderError::from(json_error);
        assert!(matches!(error, ShowfinderError::ParseError(_)));
    }

    #[test]
    fn test_error_serialize() {
        let error = ShowfinderError::RateLimited;
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Rate limited - too many requests\"");
    }

    #[test]
    fn test_error_serialize_with_message() {
        let error = ShowfinderError::NotFound("https://api.tvmaze.com/shows/0/episodes".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Not found: https://api.tvmaze.com/shows/0/episodes\"");
    }
}
