//! Showfinder Core Library
//!
//! Search the TVMaze catalog by title, render the matching shows, and list
//! episodes for a chosen show.
//!
//! # Overview
//!
//! Two pipelines share the same fetch → normalize → render shape:
//! - **show search**: `GET /search/shows?q={term}` into [`Show`] records,
//!   rendered as one block per show with an "Episodes" control
//! - **episode listing**: `GET /shows/{id}/episodes` into [`Episode`]
//!   records, rendered as a list that becomes visible once filled
//!
//! [`ShowWidget`] wires them to a [`Surface`], the display boundary. [`Page`]
//! is the in-memory surface whose [`PageSnapshot`] a webview frontend swaps
//! into its DOM.
//!
//! # Example
//!
//! ```no_run
//! use showfinder_core::{Result, ShowCatalog, ShowWidget};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let widget = ShowWidget::with_page(ShowCatalog::new()?);
//!
//!     widget.submit_search("girls").await?;
//!
//!     // Clicking "Episodes" on the first show
//!     let first = widget.with_surface(|page| page.shows().first().map(|b| b.control())).await;
//!     if let Some(control) = first {
//!         widget.request_episodes(control).await?;
//!     }
//!
//!     let snapshot = widget.snapshot().await;
//!     println!("{}", snapshot.episodes_html);
//!     Ok(())
//! }
//! ```
//!
//! # Failures
//!
//! Every stage returns [`Result`]. A failed pipeline leaves the regions as
//! they were and records a [`PageError`] on the surface until the next
//! successful pipeline clears it.

mod catalog;
mod client;
mod error;
mod page;
pub mod parser;
mod render;
mod types;
mod widget;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, TvMazeClient};

// Re-export error types
pub use error::{Result, ShowfinderError};

// Re-export parser functions
pub use parser::{parse_episodes, parse_search_results};

// Re-export the catalog and widget
pub use catalog::ShowCatalog;
pub use widget::ShowWidget;

// Re-export page and rendering types
pub use page::{Page, PageError, PageSnapshot, Pipeline, Surface};
pub use render::{
    EpisodeEntry, EpisodesControl, ShowBlock, populate_episodes, populate_shows, render_episodes,
    render_shows,
};

// Re-export data types
pub use types::{Episode, MISSING_IMAGE_URL, Show, ShowId};

// Re-export URL helper functions for convenience
pub use url::{TVMAZE_BASE_URL, build_episodes_url, build_search_url};
