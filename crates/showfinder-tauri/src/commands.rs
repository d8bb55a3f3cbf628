//! Tauri commands for the showfinder widget
//!
//! Each command runs one pipeline and returns the resulting page so the
//! frontend can swap the fragments into its containers.

use showfinder_core::{PageSnapshot, ShowId};
use tauri::State;

use crate::WidgetState;

/// Handle a search form submission
///
/// # Arguments
/// * `state` - Managed WidgetState from Tauri
/// * `term` - Search term, sent verbatim
///
/// # Returns
/// The page after the show region was replaced
///
/// # Errors
/// Returns error message as String if the search fails. The page keeps its
/// previous shows and carries the error; fetch it with `page_snapshot`.
#[tauri::command]
pub async fn search_shows(
    state: State<'_, WidgetState>,
    term: String,
) -> Result<PageSnapshot, String> {
    state
        .widget
        .submit_search(&term)
        .await
        .map_err(|e| e.to_string())?;
    Ok(state.widget.snapshot().await)
}

/// Handle a click on a show's "Episodes" button
///
/// # Arguments
/// * `state` - Managed WidgetState from Tauri
/// * `show_id` - `showId` of the block whose button was clicked
///
/// # Returns
/// The page after the episode region was replaced and revealed
///
/// # Errors
/// Returns error message as String if the show is not on the page or the
/// episode listing fails
#[tauri::command]
pub async fn list_episodes(
    state: State<'_, WidgetState>,
    show_id: u32,
) -> Result<PageSnapshot, String> {
    state
        .widget
        .request_episodes_for(ShowId(show_id))
        .await
        .map_err(|e| e.to_string())?;
    Ok(state.widget.snapshot().await)
}

/// Current page, including any error left by the last pipeline
#[tauri::command]
pub async fn page_snapshot(state: State<'_, WidgetState>) -> Result<PageSnapshot, String> {
    Ok(state.widget.snapshot().await)
}
