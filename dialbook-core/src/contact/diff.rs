// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Section List Diffing
//!
//! Computes an edit script between two sectioned lists so a renderer can
//! update rows incrementally instead of redrawing everything.

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffOp};

use super::sections::SectionEntry;

/// One step of the edit script.
///
/// Indices refer to the old list for removals and to the new list for
/// insertions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionChange {
    Removed { old_index: usize },
    Inserted { new_index: usize },
    /// Same row identity, different contents.
    Changed { old_index: usize, new_index: usize },
}

/// Row identity: headers by label, items by contact id.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum RowKey<'a> {
    Header(&'a str),
    Item(&'a str),
}

fn row_keys(entries: &[SectionEntry]) -> Vec<RowKey<'_>> {
    entries
        .iter()
        .map(|entry| match entry {
            SectionEntry::Header(label) => RowKey::Header(label),
            SectionEntry::Item(record) => RowKey::Item(record.id()),
        })
        .collect()
}

/// Diffs two sectioned lists with Myers' algorithm over row identities.
///
/// Runs in linear space, so a small change to a large list stays cheap.
/// Unchanged rows produce no step. Moves show up as a removal plus an
/// insertion.
pub fn diff_sections(old: &[SectionEntry], new: &[SectionEntry]) -> Vec<SectionChange> {
    let old_keys = row_keys(old);
    let new_keys = row_keys(new);

    let mut changes = Vec::new();
    for op in capture_diff_slices(Algorithm::Myers, &old_keys, &new_keys) {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                changes.extend(
                    (0..len)
                        .filter(|i| old[old_index + i] != new[new_index + i])
                        .map(|i| SectionChange::Changed {
                            old_index: old_index + i,
                            new_index: new_index + i,
                        }),
                );
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                changes.extend(
                    (old_index..old_index + old_len)
                        .map(|old_index| SectionChange::Removed { old_index }),
                );
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                changes.extend(
                    (new_index..new_index + new_len)
                        .map(|new_index| SectionChange::Inserted { new_index }),
                );
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                changes.extend(
                    (old_index..old_index + old_len)
                        .map(|old_index| SectionChange::Removed { old_index }),
                );
                changes.extend(
                    (new_index..new_index + new_len)
                        .map(|new_index| SectionChange::Inserted { new_index }),
                );
            }
        }
    }
    changes
}
