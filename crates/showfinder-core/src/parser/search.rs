//! Search results parser for TVMaze
//!
//! Parses the JSON array returned by `/search/shows` and normalizes every
//! entry into a [`Show`].

use serde::Deserialize;

use crate::error::Result;
use crate::types::{MISSING_IMAGE_URL, Show, ShowId};

#[derive(Debug, Deserialize)]
struct SearchHit {
    show: ApiShow,
}

#[derive(Debug, Deserialize)]
struct ApiShow {
    id: u32,
    name: String,
    summary: Option<String>,
    image: Option<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    medium: Option<String>,
}

/// Parses a search response body and returns the shows in response order
///
/// # Arguments
/// * `json` - Raw body of `GET /search/shows?q=...`
///
/// # Returns
/// Vector of normalized `Show` records, empty if nothing matched
///
/// # Errors
/// Returns `ParseError` if the body is not an array of `{ show: {...} }`
/// records or a show lacks its `id` or `name`
pub fn parse_search_results(json: &str) -> Result<Vec<Show>> {
    let hits: Vec<SearchHit> = serde_json::from_str(json)?;
    Ok(hits.into_iter().map(|hit| normalize_show(hit.show)).collect())
}

/// Builds a [`Show`] from one API record
///
/// The fallback image is decided per record.
fn normalize_show(show: ApiShow) -> Show {
    let image = show
        .image
        .and_then(|image| image.medium)
        .filter(|medium| !medium.is_empty())
        .unwrap_or_else(|| MISSING_IMAGE_URL.to_string());

    Show {
        id: ShowId(show.id),
        name: show.name,
        summary: show.summary.unwrap_or_default(),
        image,
    }
}
