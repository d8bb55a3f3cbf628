//! Page regions the widget renders into
//!
//! [`Surface`] is the boundary between the widget and whatever displays it.
//! [`Page`] is the in-memory implementation handed to webview frontends as a
//! [`PageSnapshot`].

use serde::Serialize;

use crate::render::{EpisodeEntry, EpisodesControl, ShowBlock};
use crate::types::ShowId;

/// Which pipeline produced a page error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Pipeline {
    Search,
    Episodes,
}

/// Visible error left on the page by a failed pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageError {
    pub pipeline: Pipeline,
    pub message: String,
}

/// Display regions driven by the widget
///
/// Every `replace_*` call discards what the region showed before.
pub trait Surface: Send {
    /// Replace the show region's contents
    fn replace_shows(&mut self, blocks: Vec<ShowBlock>);

    /// Replace the episode region's contents without changing its visibility
    fn replace_episodes(&mut self, entries: Vec<EpisodeEntry>);

    fn set_episodes_visible(&mut self, visible: bool);

    /// Show a failure for the given pipeline
    fn report_error(&mut self, pipeline: Pipeline, message: &str);

    fn clear_error(&mut self);

    /// The "Episodes" control currently rendered for a show, if any
    fn episodes_control(&self, show_id: ShowId) -> Option<EpisodesControl>;
}

/// In-memory page holding the show list, the episode list and an error banner
///
/// The episode region starts hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    shows: Vec<ShowBlock>,
    episodes: Vec<EpisodeEntry>,
    episodes_visible: bool,
    error: Option<PageError>,
}

/// Serializable view of a [`Page`] for webview frontends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub shows: Vec<ShowBlock>,
    pub shows_html: String,
    pub episodes_html: String,
    pub episodes_visible: bool,
    pub error: Option<PageError>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shows(&self) -> &[ShowBlock] {
        &self.shows
    }

    pub fn episodes(&self) -> &[EpisodeEntry] {
        &self.episodes
    }

    pub fn episodes_visible(&self) -> bool {
        self.episodes_visible
    }

    pub fn error(&self) -> Option<&PageError> {
        self.error.as_ref()
    }

    /// Markup of the show region
    pub fn shows_html(&self) -> String {
        self.shows.iter().map(ShowBlock::html).collect::<Vec<_>>().join("\n")
    }

    /// Markup of the episode region
    pub fn episodes_html(&self) -> String {
        self.episodes
            .iter()
            .map(EpisodeEntry::html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            shows: self.shows.clone(),
            shows_html: self.shows_html(),
            episodes_html: self.episodes_html(),
            episodes_visible: self.episodes_visible,
            error: self.error.clone(),
        }
    }
}

impl Surface for Page {
    fn replace_shows(&mut self, blocks: Vec<ShowBlock>) {
        self.shows = blocks;
    }

    fn replace_episodes(&mut self, entries: Vec<EpisodeEntry>) {
        self.episodes = entries;
    }

    fn set_episodes_visible(&mut self, visible: bool) {
        self.episodes_visible = visible;
    }

    fn report_error(&mut self, pipeline: Pipeline, message: &str) {
        self.error = Some(PageError {
            pipeline,
            message: message.to_string(),
        });
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn episodes_control(&self, show_id: ShowId) -> Option<EpisodesControl> {
        self.shows
            .iter()
            .find(|block| block.show_id() == show_id)
            .map(ShowBlock::control)
    }
}
