//! Display Helpers
//!
//! Terminal output for the text format and status lines.

use chrono::Local;
use console::style;
use serde::Serialize;

use dialbook_core::{
    CallEntry, ContactRecord, DuplicateGroup, SearchHistoryItem, SectionEntry, SmartSuggestion,
};

pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", style("→").cyan(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), msg);
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn contact_line(record: &ContactRecord) -> String {
    let phone = record.all_phones().first().copied().unwrap_or("");
    let star = if record.is_favorite() { "★ " } else { "" };
    format!(
        "  {}{:<28} {:<18} {}",
        star,
        record.name(),
        phone,
        style(record.id()).dim()
    )
}

pub fn display_contacts(records: &[ContactRecord]) {
    for record in records {
        println!("{}", contact_line(record));
    }
}

pub fn display_sections(entries: &[SectionEntry]) {
    for entry in entries {
        match entry {
            SectionEntry::Header(label) => println!("{}", style(label).bold()),
            SectionEntry::Item(record) => println!("{}", contact_line(record)),
        }
    }
}

pub fn display_duplicates(groups: &[DuplicateGroup]) {
    for (i, group) in groups.iter().enumerate() {
        println!(
            "{} {} ({} contacts, score {:.2})",
            style(format!("Group {}:", i + 1)).bold(),
            group.primary().map(|c| c.name()).unwrap_or_default(),
            group.len(),
            group.score
        );
        display_contacts(&group.members);
    }
}

pub fn display_suggestions(suggestions: &[SmartSuggestion]) {
    for suggestion in suggestions {
        println!(
            "{}  {:?} ({:.2})",
            contact_line(&suggestion.record),
            suggestion.reason,
            suggestion.score
        );
    }
}

pub fn display_history(items: &[SearchHistoryItem]) {
    for item in items {
        println!("  {}", item.query);
    }
}

pub fn display_calls(entries: &[CallEntry]) {
    for entry in entries {
        match entry {
            CallEntry::Header(label) => println!("{}", style(label).bold()),
            CallEntry::Call(call) => println!(
                "  {:<28} {:<10} {:>8}  {}",
                call.display_name(),
                format!("{:?}", call.kind),
                call.formatted_time(&Local).to_lowercase(),
                call.formatted_duration()
            ),
        }
    }
}
