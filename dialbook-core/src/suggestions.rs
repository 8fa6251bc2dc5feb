// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Smart Suggestions
//!
//! Ranks contacts worth surfacing at the top of the dialer from favorite,
//! call-frequency and recency signals.

use serde::{Deserialize, Serialize};

use crate::contact::ContactRecord;

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Ceiling for frequency-based scores.
const MAX_FREQUENT_SCORE: f32 = 0.9;
/// Ceiling for recency-based scores.
const MAX_RECENT_SCORE: f32 = 0.8;

/// Why a contact was suggested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionReason {
    FrequentlyContacted,
    RecentlyContacted,
    Favorite,
    SearchHistory,
}

/// A suggested contact with its ranking score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmartSuggestion {
    pub record: ContactRecord,
    pub reason: SuggestionReason,
    pub score: f32,
}

/// Suggestion ranker with configurable candidate pools.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRanker {
    /// Top-N contacts by call count that are considered.
    pub frequent_candidates: usize,
    /// Top-N most recently contacted that are considered.
    pub recent_candidates: usize,
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self {
            frequent_candidates: 5,
            recent_candidates: 5,
        }
    }
}

impl SuggestionRanker {
    /// Ranks suggestions, highest score first, truncated to `limit`.
    ///
    /// A contact can appear several times with different reasons.
    pub fn rank(
        &self,
        records: &[ContactRecord],
        limit: usize,
        now_millis: u64,
    ) -> Vec<SmartSuggestion> {
        let mut suggestions: Vec<SmartSuggestion> = records
            .iter()
            .filter(|r| r.is_favorite())
            .map(|r| SmartSuggestion {
                record: r.clone(),
                reason: SuggestionReason::Favorite,
                score: 1.0,
            })
            .collect();

        let mut by_frequency: Vec<&ContactRecord> = records.iter().collect();
        by_frequency.sort_by(|a, b| b.times_contacted().cmp(&a.times_contacted()));
        suggestions.extend(
            by_frequency
                .into_iter()
                .take(self.frequent_candidates)
                .filter(|r| r.times_contacted() > 0)
                .map(|r| SmartSuggestion {
                    record: r.clone(),
                    reason: SuggestionReason::FrequentlyContacted,
                    score: (r.times_contacted() as f32 / 100.0).min(MAX_FREQUENT_SCORE),
                }),
        );

        let mut by_recency: Vec<&ContactRecord> = records.iter().collect();
        by_recency.sort_by(|a, b| b.last_contacted_at().cmp(&a.last_contacted_at()));
        suggestions.extend(
            by_recency
                .into_iter()
                .take(self.recent_candidates)
                .filter(|r| r.last_contacted_at() > 0)
                .map(|r| {
                    let days = now_millis.saturating_sub(r.last_contacted_at()) / MILLIS_PER_DAY;
                    SmartSuggestion {
                        record: r.clone(),
                        reason: SuggestionReason::RecentlyContacted,
                        score: (1.0 / (days as f32 + 1.0)).min(MAX_RECENT_SCORE),
                    }
                }),
        );

        suggestions.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        suggestions.truncate(limit);
        suggestions
    }
}

/// Ranks suggestions with the default candidate pools of five.
pub fn rank_suggestions(
    records: &[ContactRecord],
    limit: usize,
    now_millis: u64,
) -> Vec<SmartSuggestion> {
    SuggestionRanker::default().rank(records, limit, now_millis)
}
