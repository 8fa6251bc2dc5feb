// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Similarity Scoring
//!
//! Edit-distance string similarity and the weighted multi-field score
//! used by duplicate detection.

use std::collections::HashSet;

use super::{normalize_phone, ContactRecord};

/// Weight of the name factor.
const NAME_WEIGHT: f32 = 3.0;
/// Weight of the phone factor (always counted in the denominator).
const PHONE_WEIGHT: f32 = 2.0;
/// Weight of the email factor (always counted in the denominator).
const EMAIL_WEIGHT: f32 = 1.0;

/// Unit-cost Levenshtein distance over Unicode scalar values.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[a.len()][b.len()]
}

/// Normalized similarity in `[0, 1]`.
///
/// Case folding is left to the caller.
pub fn string_similarity(a: &str, b: &str) -> f32 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein_distance(a, b);
    1.0 - distance as f32 / max_len as f32
}

/// Weighted similarity between two contacts, in `[0, 1]`.
///
/// Name similarity counts only when both names are present; the phone and
/// email factors always count towards the denominator, so a missing phone
/// or email is treated as a mismatch. Values that normalize to nothing
/// never match.
pub fn similarity_score(a: &ContactRecord, b: &ContactRecord) -> f32 {
    let mut score = 0.0;
    let mut factors = 0.0;

    if !a.name().is_empty() && !b.name().is_empty() {
        let name_sim = string_similarity(&a.name().to_lowercase(), &b.name().to_lowercase());
        score += name_sim * NAME_WEIGHT;
        factors += NAME_WEIGHT;
    }

    let a_phones = normalized_set(a.all_phones(), normalize_phone);
    let b_phones = normalized_set(b.all_phones(), normalize_phone);
    if !a_phones.is_disjoint(&b_phones) {
        score += PHONE_WEIGHT;
    }
    factors += PHONE_WEIGHT;

    let a_emails = normalized_set(a.all_emails(), str::to_lowercase);
    let b_emails = normalized_set(b.all_emails(), str::to_lowercase);
    if !a_emails.is_disjoint(&b_emails) {
        score += EMAIL_WEIGHT;
    }
    factors += EMAIL_WEIGHT;

    if factors > 0.0 {
        score / factors
    } else {
        0.0
    }
}

fn normalized_set(values: Vec<&str>, normalize: impl Fn(&str) -> String) -> HashSet<String> {
    values
        .into_iter()
        .map(normalize)
        .filter(|v| !v.is_empty())
        .collect()
}
