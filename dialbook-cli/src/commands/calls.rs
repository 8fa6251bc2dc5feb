//! Call Log Command
//!
//! Reads a JSON array of call records and prints it under date headers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use dialbook_core::{build_call_sections, CallRecord};

use crate::config::{CliConfig, OutputFormat};
use crate::display;

pub fn run(config: &CliConfig, path: &Path) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read call log {}", path.display()))?;
    let mut calls: Vec<CallRecord> = serde_json::from_str(&data)?;
    calls.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms));

    let entries = build_call_sections(&calls, &Local::now());

    match config.format {
        OutputFormat::Json => display::print_json(&entries)?,
        OutputFormat::Text => {
            if entries.is_empty() {
                display::info("No calls.");
            } else {
                display::display_calls(&entries);
            }
        }
    }
    Ok(())
}
