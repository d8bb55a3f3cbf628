//! Search widget
//!
//! Wires user actions to the two pipelines:
//!
//! - submitting a search hides the episode region, fetches matching shows and
//!   replaces the show region;
//! - clicking a show's "Episodes" control fetches its episodes, replaces the
//!   episode region and reveals it.
//!
//! The surface is only locked while rendering, never across a fetch, so
//! overlapping invocations all complete and the one that finishes last owns
//! the region.

use tokio::sync::Mutex;

use crate::catalog::ShowCatalog;
use crate::error::{Result, ShowfinderError};
use crate::page::{Page, PageSnapshot, Pipeline, Surface};
use crate::render::{EpisodesControl, populate_episodes, populate_shows};
use crate::types::ShowId;

/// Show search widget rendering into an injected [`Surface`]
pub struct ShowWidget<S: Surface> {
    catalog: ShowCatalog,
    surface: Mutex<S>,
}

impl<S: Surface> ShowWidget<S> {
    pub fn new(catalog: ShowCatalog, surface: S) -> Self {
        Self {
            catalog,
            surface: Mutex::new(surface),
        }
    }

    /// Handle a search form submission
    ///
    /// The episode region is hidden before the request is sent.
    ///
    /// # Returns
    /// Number of shows rendered
    ///
    /// # Errors
    /// Any fetch, parse or render error. The error is also reported on the
    /// surface and the show region keeps its previous contents.
    pub async fn submit_search(&self, term: &str) -> Result<usize> {
        self.surface.lock().await.set_episodes_visible(false);

        let outcome = self.search_and_render(term).await;
        if let Ok(count) = &outcome {
            tracing::info!(term, count, "rendered search results");
        }
        self.settle(Pipeline::Search, outcome).await
    }

    /// Handle a click on a show's "Episodes" control
    ///
    /// # Returns
    /// Number of episodes rendered
    ///
    /// # Errors
    /// Any fetch, parse or render error, also reported on the surface. The
    /// episode region keeps its previous contents and visibility.
    pub async fn request_episodes(&self, control: EpisodesControl) -> Result<usize> {
        let show_id = control.show_id();
        let outcome = self.episodes_and_render(show_id).await;
        if let Ok(count) = &outcome {
            tracing::info!(%show_id, count, "rendered episodes");
        }
        self.settle(Pipeline::Episodes, outcome).await
    }

    /// Handle an "Episodes" click identified only by show id
    ///
    /// # Errors
    /// `UnknownShow` if no control for `show_id` is currently rendered; no
    /// request is made in that case. Otherwise as [`ShowWidget::request_episodes`].
    pub async fn request_episodes_for(&self, show_id: ShowId) -> Result<usize> {
        let control = self.surface.lock().await.episodes_control(show_id);
        match control {
            Some(control) => self.request_episodes(control).await,
            None => {
                self.settle(Pipeline::Episodes, Err(ShowfinderError::UnknownShow(show_id)))
                    .await
            }
        }
    }

    /// Run a closure against the current surface
    pub async fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let surface = self.surface.lock().await;
        f(&surface)
    }

    async fn search_and_render(&self, term: &str) -> Result<usize> {
        let shows = self.catalog.search_shows(term).await?;
        let mut surface = self.surface.lock().await;
        populate_shows(&mut *surface, &shows)?;
        surface.clear_error();
        Ok(shows.len())
    }

    async fn episodes_and_render(&self, show_id: ShowId) -> Result<usize> {
        let episodes = self.catalog.get_episodes(show_id).await?;
        let mut surface = self.surface.lock().await;
        populate_episodes(&mut *surface, &episodes)?;
        surface.clear_error();
        Ok(episodes.len())
    }

    /// Report a failed pipeline on the surface
    ///
    /// Success clears the error under the same lock as the render, so only
    /// failures are handled here.
    async fn settle(&self, pipeline: Pipeline, outcome: Result<usize>) -> Result<usize> {
        if let Err(e) = &outcome {
            tracing::warn!(?pipeline, error = %e, "pipeline failed");
            self.surface.lock().await.report_error(pipeline, &e.to_string());
        }
        outcome
    }
}

impl ShowWidget<Page> {
    /// Create a widget over a fresh in-memory [`Page`]
    pub fn with_page(catalog: ShowCatalog) -> Self {
        Self::new(catalog, Page::new())
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        self.surface.lock().await.snapshot()
    }
}
