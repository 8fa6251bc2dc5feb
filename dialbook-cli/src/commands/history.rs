//! Search History Command

use anyhow::Result;

use crate::commands::open_repository;
use crate::config::{CliConfig, OutputFormat};
use crate::display;

/// Prints recent searches, or clears them.
pub fn run(config: &CliConfig, clear: bool) -> Result<()> {
    let repo = open_repository(config)?;

    if clear {
        repo.clear_search_history()?;
        if config.format == OutputFormat::Text {
            display::success("Search history cleared.");
        } else {
            display::print_json(&serde_json::json!({ "cleared": true }))?;
        }
        return Ok(());
    }

    let items = repo.search_history()?;
    match config.format {
        OutputFormat::Json => display::print_json(&items)?,
        OutputFormat::Text => {
            if items.is_empty() {
                display::info("No recent searches.");
            } else {
                display::display_history(&items);
            }
        }
    }
    Ok(())
}
