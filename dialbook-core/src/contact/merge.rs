// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Duplicate Detection

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::similarity::similarity_score;
use super::ContactRecord;
use crate::error::CoreError;

/// Default similarity needed for two contacts to be grouped (70%).
pub const DEFAULT_DUPLICATE_THRESHOLD: f32 = 0.7;

/// A cluster of contacts judged to be the same person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Group members, anchor first. Always at least two.
    pub members: Vec<ContactRecord>,
    /// Average similarity of the anchor to every other member.
    pub score: f32,
}

impl DuplicateGroup {
    /// The member to keep when merging: most contacted, first one on ties.
    ///
    /// `None` only for a group without members.
    pub fn primary(&self) -> Option<&ContactRecord> {
        self.members.iter().reduce(|best, member| {
            if member.times_contacted() > best.times_contacted() {
                member
            } else {
                best
            }
        })
    }

    /// The record the group was built around.
    pub fn anchor(&self) -> Option<&ContactRecord> {
        self.members.first()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Finds duplicate groups in a contact snapshot.
///
/// Greedy and order-dependent: each unprocessed record in input order
/// becomes an anchor and collects every other unprocessed record scoring at
/// least `threshold` against it. Chains of records that are only
/// transitively similar are not merged. Groups are sorted by descending
/// score; ties keep discovery order.
///
/// Fails with [`CoreError::InvalidRecord`] if any record has an empty id.
pub fn find_duplicates(
    records: &[ContactRecord],
    threshold: f32,
) -> Result<Vec<DuplicateGroup>, CoreError> {
    for record in records {
        record.validate()?;
    }

    let mut groups = Vec::new();
    let mut processed: HashSet<&str> = HashSet::new();

    for anchor in records {
        if processed.contains(anchor.id()) {
            continue;
        }

        let mut members = vec![anchor.clone()];
        let mut scores = Vec::new();

        for other in records {
            if other.id() == anchor.id() || processed.contains(other.id()) {
                continue;
            }
            let score = similarity_score(anchor, other);
            if score >= threshold {
                members.push(other.clone());
                scores.push(score);
                processed.insert(other.id());
            }
        }

        if members.len() > 1 {
            let score = scores.iter().sum::<f32>() / scores.len() as f32;
            groups.push(DuplicateGroup { members, score });
            processed.insert(anchor.id());
        }
    }

    groups.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        contacts = records.len(),
        groups = groups.len(),
        threshold,
        "duplicate detection finished"
    );
    Ok(groups)
}
