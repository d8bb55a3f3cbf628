//! URL helper functions for the TVMaze API
//!
//! Provides functions for building the search and episode listing URLs.

use crate::types::ShowId;

/// Public TVMaze API root
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Builds the show search URL for a given term
///
/// The term is used verbatim and only percent-encoded for transport,
/// so an empty term is allowed.
///
/// # Arguments
/// * `base_url` - API root (e.g., "https://api.tvmaze.com")
/// * `term` - Free-text search term
///
/// # Example
/// ```
/// use showfinder_core::url::build_search_url;
/// let url = build_search_url("https://api.tvmaze.com", "doctor who");
/// assert_eq!(url, "https://api.tvmaze.com/search/shows?q=doctor%20who");
/// ```
pub fn build_search_url(base_url: &str, term: &str) -> String {
    let encoded = urlencoding::encode(term);
    format!("{}/search/shows?q={}", base_url.trim_end_matches('/'), encoded)
}

/// Builds the episode listing URL for a show
///
/// # Example
/// ```
/// use showfinder_core::{url::build_episodes_url, ShowId};
/// let url = build_episodes_url("https://api.tvmaze.com/", ShowId(139));
/// assert_eq!(url, "https://api.tvmaze.com/shows/139/episodes");
/// ```
pub fn build_episodes_url(base_url: &str, show_id: ShowId) -> String {
    format!("{}/shows/{}/episodes", base_url.trim_end_matches('/'), show_id)
}
