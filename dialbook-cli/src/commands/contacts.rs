//! Contacts Command
//!
//! Sectioned listing, search, duplicates, suggestions, favorites and
//! dialed-number lookup.

use anyhow::Result;
use dialbook_core::{format_phone_number, is_valid_phone_number};

use crate::commands::open_repository;
use crate::config::{CliConfig, OutputFormat};
use crate::display;

/// Prints the favorite and alphabetic sections.
pub fn sections(config: &CliConfig) -> Result<()> {
    let repo = open_repository(config)?;
    let entries = repo.sorted_sections(false)?;

    match config.format {
        OutputFormat::Json => display::print_json(&entries)?,
        OutputFormat::Text => {
            if entries.is_empty() {
                display::info("No contacts with a phone number.");
            } else {
                display::display_sections(&entries);
            }
        }
    }
    Ok(())
}

/// Prints contacts matching `query`.
pub fn search(config: &CliConfig, query: &str) -> Result<()> {
    let repo = open_repository(config)?;
    let matches = repo.search(query)?;

    match config.format {
        OutputFormat::Json => display::print_json(&matches)?,
        OutputFormat::Text => {
            if matches.is_empty() {
                display::info(&format!("No contacts match '{}'", query));
            } else {
                println!("Results ({}):", matches.len());
                display::display_contacts(&matches);
            }
        }
    }
    Ok(())
}

/// Prints duplicate groups, best match first.
pub fn duplicates(config: &CliConfig) -> Result<()> {
    let repo = open_repository(config)?;
    let groups = repo.detect_duplicates()?;

    match config.format {
        OutputFormat::Json => display::print_json(&groups)?,
        OutputFormat::Text => {
            if groups.is_empty() {
                display::success("No duplicates found.");
            } else {
                display::display_duplicates(&groups);
            }
        }
    }
    Ok(())
}

/// Prints up to `limit` ranked suggestions.
pub fn suggest(config: &CliConfig, limit: usize) -> Result<()> {
    let repo = open_repository(config)?;
    let suggestions = repo.smart_suggestions(limit)?;

    match config.format {
        OutputFormat::Json => display::print_json(&suggestions)?,
        OutputFormat::Text => {
            if suggestions.is_empty() {
                display::info("No suggestions yet.");
            } else {
                display::display_suggestions(&suggestions);
            }
        }
    }
    Ok(())
}

/// Toggles a contact's favorite flag.
pub fn favorite(config: &CliConfig, id: &str) -> Result<()> {
    let repo = open_repository(config)?;
    let name = repo.get_contact(id)?.name().to_string();

    let is_favorite = repo.toggle_favorite(id)?;

    match config.format {
        OutputFormat::Json => display::print_json(&serde_json::json!({
            "id": id,
            "is_favorite": is_favorite,
        }))?,
        OutputFormat::Text if is_favorite => {
            display::success(&format!("Added {} to favorites", name))
        }
        OutputFormat::Text => display::success(&format!("Removed {} from favorites", name)),
    }
    Ok(())
}

/// Formats a dialed number and shows which contact owns it.
pub fn lookup(config: &CliConfig, number: &str) -> Result<()> {
    let repo = open_repository(config)?;
    let contact = repo.lookup_number(number)?;
    let formatted = format_phone_number(number);
    let valid = is_valid_phone_number(number);

    match config.format {
        OutputFormat::Json => display::print_json(&serde_json::json!({
            "number": formatted,
            "valid": valid,
            "contact": contact,
        }))?,
        OutputFormat::Text => {
            println!("{}", formatted);
            match &contact {
                Some(c) => display::success(&format!("Existing contact: {}", c.name())),
                None => display::info("Not in contacts."),
            }
            if !valid {
                display::warning("Number is too short to call.");
            }
        }
    }
    Ok(())
}
