//! Core data types for the showfinder widget
//!
//! Normalized records produced from TVMaze responses. They live only as long
//! as the page region that displays them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image shown for a show when TVMaze has no medium-size poster
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/missing-tv";

/// Remote-assigned TVMaze show identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(pub u32);

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ShowId {
    fn from(id: u32) -> Self {
        ShowId(id)
    }
}

/// A show returned by the search endpoint, after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// TVMaze show ID
    pub id: ShowId,

    /// Show title
    pub name: String,

    /// Summary as delivered by TVMaze, may contain HTML markup
    pub summary: String,

    /// Absolute image URL, [`MISSING_IMAGE_URL`] when the source has none
    pub image: String,
}

/// A single episode of a show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// TVMaze episode ID
    pub id: u32,

    /// Episode title
    pub name: String,

    /// Season number
    pub season: u32,

    /// Episode number within its season
    pub number: u32,
}
