// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Alphabetic Sections
//!
//! Turns a sorted contact list into a flat sequence of headers and items
//! for list rendering, with favorites pinned in their own block.

use serde::{Deserialize, Serialize};

use super::ContactRecord;

/// Header label of the favorites block.
pub const FAVORITES_HEADER: &str = "★ Favorites";

/// One row of a sectioned contact list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum SectionEntry {
    Header(String),
    Item(ContactRecord),
}

impl SectionEntry {
    /// Returns the header label, if this is a header.
    pub fn header(&self) -> Option<&str> {
        match self {
            SectionEntry::Header(label) => Some(label),
            SectionEntry::Item(_) => None,
        }
    }

    /// Returns the record, if this is an item.
    pub fn record(&self) -> Option<&ContactRecord> {
        match self {
            SectionEntry::Header(_) => None,
            SectionEntry::Item(record) => Some(record),
        }
    }
}

/// Sorts contacts into section order: favorites first, then by
/// uppercased name. The sort is stable.
pub fn sort_for_sections(records: &mut [ContactRecord]) {
    records.sort_by_cached_key(|r| (!r.is_favorite(), r.name().to_uppercase()));
}

/// Builds the sectioned list.
///
/// `records` must already be in [`sort_for_sections`] order; the input is
/// not re-sorted. Each header is emitted right before the first item of its
/// run, so sections are never empty.
pub fn build_sections(records: &[ContactRecord]) -> Vec<SectionEntry> {
    let mut entries = Vec::with_capacity(records.len() + 27);
    // Never equal to a real section label.
    let mut current: Option<String> = None;
    let mut favorites_started = false;

    for record in records {
        if record.is_favorite() {
            if !favorites_started {
                entries.push(SectionEntry::Header(FAVORITES_HEADER.to_string()));
                favorites_started = true;
                current = Some(FAVORITES_HEADER.to_string());
            }
        } else {
            let section = record.section_character();
            if current.as_deref() != Some(section.as_str()) {
                entries.push(SectionEntry::Header(section.clone()));
                current = Some(section);
            }
        }
        entries.push(SectionEntry::Item(record.clone()));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[SectionEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| match e {
                SectionEntry::Header(label) => format!("[{}]", label),
                SectionEntry::Item(r) => r.name().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_favorites_then_letters() {
        let mut records = vec![
            ContactRecord::new("3", "Zoe"),
            ContactRecord::new("1", "Bob").with_favorite(true),
            ContactRecord::new("2", "Amy"),
        ];
        sort_for_sections(&mut records);
        let entries = build_sections(&records);
        assert_eq!(
            labels(&entries),
            vec!["[★ Favorites]", "Bob", "[A]", "Amy", "[Z]", "Zoe"]
        );
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut records = vec![
            ContactRecord::new("1", "bob"),
            ContactRecord::new("2", "Alice"),
            ContactRecord::new("3", "Bea"),
        ];
        sort_for_sections(&mut records);
        let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Alice", "Bea", "bob"]);
    }

    #[test]
    fn test_non_letters_share_hash_section() {
        let records = vec![
            ContactRecord::new("1", ""),
            ContactRecord::new("2", "1-800-FLOWERS"),
        ];
        let entries = build_sections(&records);
        assert_eq!(labels(&entries), vec!["[#]", "", "1-800-FLOWERS"]);
    }

    #[test]
    fn test_sharp_s_splits_letter_run() {
        // "ßen" sorts as "SSEN" but has no letter section of its own.
        let mut records = vec![
            ContactRecord::new("1", "Sue"),
            ContactRecord::new("2", "ßen"),
            ContactRecord::new("3", "Sam"),
        ];
        sort_for_sections(&mut records);
        assert_eq!(
            labels(&build_sections(&records)),
            vec!["[S]", "Sam", "[#]", "ßen", "[S]", "Sue"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(build_sections(&[]).is_empty());
    }

    #[test]
    fn test_unsorted_input_repeats_headers() {
        // The sectionizer trusts its input order.
        let records = vec![
            ContactRecord::new("1", "Amy"),
            ContactRecord::new("2", "Ben"),
            ContactRecord::new("3", "Ada"),
        ];
        let entries = build_sections(&records);
        assert_eq!(
            labels(&entries),
            vec!["[A]", "Amy", "[B]", "Ben", "[A]", "Ada"]
        );
    }
}
