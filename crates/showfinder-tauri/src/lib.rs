//! Showfinder Tauri Integration
//!
//! Provides a Tauri plugin that backs the show search widget of a webview
//! frontend.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(showfinder_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then forward the widget's events from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Search form submitted
//! episodesArea.hidden = true;
//! const page = await invoke('plugin:showfinder|search_shows', { term: 'girls' });
//! showsList.innerHTML = page.showsHtml;
//!
//! // "Episodes" clicked
//! const next = await invoke('plugin:showfinder|list_episodes', { showId: 139 });
//! episodesList.innerHTML = next.episodesHtml;
//! episodesArea.hidden = !next.episodesVisible;
//! ```

use std::sync::Arc;

use showfinder_core::{ClientConfig, Page, ShowCatalog, ShowWidget};
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

mod commands;

/// Shared widget state
///
/// The widget locks its page only while rendering, so commands from the
/// frontend run concurrently and the last pipeline to finish owns the page.
pub struct WidgetState {
    pub(crate) widget: Arc<ShowWidget<Page>>,
}

impl WidgetState {
    /// Create a new WidgetState against the public TVMaze API
    ///
    /// # Errors
    /// Returns error string if catalog initialization fails
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new WidgetState with custom client configuration
    ///
    /// # Errors
    /// Returns error string if the configuration is invalid
    pub fn with_config(config: ClientConfig) -> Result<Self, String> {
        let catalog = ShowCatalog::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            widget: Arc::new(ShowWidget::with_page(catalog)),
        })
    }
}

/// Initialize the showfinder plugin
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("showfinder")
        .invoke_handler(tauri::generate_handler![
            commands::search_shows,
            commands::list_episodes,
            commands::page_snapshot
        ])
        .setup(|app, _api| {
            let state = WidgetState::new().map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use showfinder_core::PageSnapshot as Snapshot;
