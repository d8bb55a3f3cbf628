//! Episode list parser for TVMaze
//!
//! Parses the JSON array returned by `/shows/{id}/episodes`.

use serde::Deserialize;

use crate::error::Result;
use crate::types::Episode;

#[derive(Debug, Deserialize)]
struct ApiEpisode {
    id: u32,
    name: String,
    season: u32,
    number: u32,
}

/// Parses an episode listing body and returns the episodes in response order
///
/// Fields are copied verbatim; every one of them is required.
///
/// # Errors
/// Returns `ParseError` if the body is not an array or a record lacks
/// `id`, `name`, `season` or `number`
pub fn parse_episodes(json: &str) -> Result<Vec<Episode>> {
    let episodes: Vec<ApiEpisode> = serde_json::from_str(json)?;
    Ok(episodes
        .into_iter()
        .map(|episode| Episode {
            id: episode.id,
            name: episode.name,
            season: episode.season,
            number: episode.number,
        })
        .collect())
}
