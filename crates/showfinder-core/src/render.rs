//! HTML rendering for shows and episodes
//!
//! `render_*` functions are pure: they turn normalized records into page
//! fragments. `populate_*` functions push those fragments into a [`Surface`]
//! with full-replace semantics.

use askama::Template;
use serde::Serialize;

use crate::error::Result;
use crate::page::Surface;
use crate::types::{Episode, Show, ShowId};

#[derive(Template)]
#[template(
    source = r#"<div data-show-id="{{ show.id }}" class="Show col-md-12 col-lg-6 mb-4">
  <div class="media">
    <img src="{{ show.image }}" alt="{{ show.name }}" class="w-25 me-3">
    <div class="media-body">
      <h5 class="text-primary">{{ show.name }}</h5>
      <div><small>{{ show.summary|safe }}</small></div>
      <button class="btn btn-outline-light btn-sm Show-getEpisodes" data-show-id="{{ show.id }}">Episodes</button>
    </div>
  </div>
</div>"#,
    ext = "html"
)]
struct ShowBlockTemplate<'a> {
    show: &'a Show,
}

#[derive(Template)]
#[template(
    source = "<li>{{ episode.name }} (season {{ episode.season }}, number {{ episode.number }})</li>",
    ext = "html"
)]
struct EpisodeEntryTemplate<'a> {
    episode: &'a Episode,
}

/// The "Episodes" button of a rendered show
///
/// Only the renderer creates controls, so the id it carries always belongs to
/// a show that was on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EpisodesControl {
    show_id: ShowId,
}

impl EpisodesControl {
    pub fn show_id(&self) -> ShowId {
        self.show_id
    }
}

/// One rendered show: its markup plus its bound "Episodes" control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowBlock {
    #[serde(rename = "showId")]
    control: EpisodesControl,
    html: String,
}

impl ShowBlock {
    pub fn control(&self) -> EpisodesControl {
        self.control
    }

    pub fn show_id(&self) -> ShowId {
        self.control.show_id
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// One rendered episode list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeEntry {
    episode_id: u32,
    html: String,
}

impl EpisodeEntry {
    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Renders one block per show, in order
///
/// Name and image are HTML-escaped; the summary is inserted as markup.
pub fn render_shows(shows: &[Show]) -> Result<Vec<ShowBlock>> {
    shows
        .iter()
        .map(|show| {
            let html = ShowBlockTemplate { show }.render()?;
            Ok(ShowBlock {
                control: EpisodesControl { show_id: show.id },
                html,
            })
        })
        .collect()
}

/// Renders one list item per episode, in order
pub fn render_episodes(episodes: &[Episode]) -> Result<Vec<EpisodeEntry>> {
    episodes
        .iter()
        .map(|episode| {
            let html = EpisodeEntryTemplate { episode }.render()?;
            Ok(EpisodeEntry {
                episode_id: episode.id,
                html,
            })
        })
        .collect()
}

/// Replaces the show region with the given shows
///
/// Nothing on the surface changes if rendering fails.
pub fn populate_shows<S: Surface + ?Sized>(surface: &mut S, shows: &[Show]) -> Result<()> {
    let blocks = render_shows(shows)?;
    surface.replace_shows(blocks);
    Ok(())
}

/// Replaces the episode region with the given episodes and reveals it
pub fn populate_episodes<S: Surface + ?Sized>(
    surface: &mut S,
    episodes: &[Episode],
) -> Result<()> {
    let entries = render_episodes(episodes)?;
    surface.replace_episodes(entries);
    surface.set_episodes_visible(true);
    Ok(())
}
