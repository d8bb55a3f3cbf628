//! Show catalog API
//!
//! Combines the HTTP client with the JSON normalizers: these are the fetch
//! and normalize stages of both widget pipelines.

use crate::client::{ClientConfig, TvMazeClient};
use crate::error::Result;
use crate::parser::{parse_episodes, parse_search_results};
use crate::types::{Episode, Show, ShowId};
use crate::url::{build_episodes_url, build_search_url};

/// TVMaze show catalog
pub struct ShowCatalog {
    client: TvMazeClient,
}

impl ShowCatalog {
    /// Create a catalog against the public TVMaze API
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = TvMazeClient::new()?;
        Ok(Self { client })
    }

    /// Create a catalog with custom client configuration
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = TvMazeClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Search shows by name
    ///
    /// The term is sent verbatim; an empty term is a valid query.
    ///
    /// # Returns
    /// Normalized shows in response order, empty if nothing matched
    ///
    /// # Errors
    /// - `HttpError` if the request fails in transport
    /// - `NotFound`, `RateLimited`, `UnexpectedStatus` for non-success statuses
    /// - `ParseError` if the body does not have the expected shape
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> showfinder_core::Result<()> {
    /// use showfinder_core::ShowCatalog;
    /// let catalog = ShowCatalog::new()?;
    /// for show in catalog.search_shows("batman").await? {
    ///     println!("{}: {}", show.id, show.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<Show>> {
        let url = build_search_url(self.client.base_url(), term);
        let body = self.client.fetch(&url).await?;
        let shows = parse_search_results(&body)?;
        tracing::debug!(term, count = shows.len(), "normalized search results");
        Ok(shows)
    }

    /// List every episode of a show
    ///
    /// # Returns
    /// Episodes in response order, empty if the show has none
    ///
    /// # Errors
    /// Same as [`ShowCatalog::search_shows`]; an unknown id yields `NotFound`
    pub async fn get_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>> {
        let url = build_episodes_url(self.client.base_url(), show_id);
        let body = self.client.fetch(&url).await?;
        let episodes = parse_episodes(&body)?;
        tracing::debug!(%show_id, count = episodes.len(), "normalized episodes");
        Ok(episodes)
    }
}
