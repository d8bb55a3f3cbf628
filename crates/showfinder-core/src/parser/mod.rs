//! JSON normalizers for TVMaze responses
//!
//! Contains modules for each endpoint the widget consumes.

pub mod episodes;
pub mod search;

pub use episodes::parse_episodes;
pub use search::parse_search_results;
