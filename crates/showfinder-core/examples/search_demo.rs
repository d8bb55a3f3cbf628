//! Drive the widget against the live TVMaze API and print the page fragments
//!
//! Run with: RUST_LOG=showfinder_core=debug cargo run --example search_demo -p showfinder-core -- "girls"

use showfinder_core::{ShowCatalog, ShowWidget};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "girls".to_string());
    let widget = ShowWidget::with_page(ShowCatalog::new()?);

    println!("Searching for '{}'...\n", term);
    let count = widget.submit_search(&term).await?;
    println!("Found {} shows:\n", count);

    let snapshot = widget.snapshot().await;
    for block in &snapshot.shows {
        println!("--- show {} ---", block.show_id());
        println!("{}\n", block.html());
    }

    let Some(first) = snapshot.shows.first() else {
        println!("No results found!");
        return Ok(());
    };

    println!("Listing episodes for show {}...\n", first.show_id());
    match widget.request_episodes(first.control()).await {
        Ok(count) => {
            let snapshot = widget.snapshot().await;
            println!("✓ {} episodes (visible: {})", count, snapshot.episodes_visible);
            println!("{}", snapshot.episodes_html);
        }
        Err(e) => {
            println!("✗ Failed to list episodes: {}", e);
            if let Some(error) = widget.snapshot().await.error {
                println!("Page error ({:?}): {}", error.pipeline, error.message);
            }
        }
    }

    Ok(())
}
