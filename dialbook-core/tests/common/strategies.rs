// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable strategies for property-based testing.

use dialbook_core::ContactRecord;
use proptest::prelude::*;

/// Strategy for display names, including empty and non-ASCII ones.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z ]{0,20}",
        "[0-9#@][a-z]{0,5}",
        "[éøÅ][a-z]{0,5}",
        Just(String::new()),
    ]
}

/// Strategy for phone numbers in assorted formats.
pub fn phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{3}-[0-9]{4}",
        "\\+[0-9]{10,12}",
        "\\([0-9]{3}\\) [0-9]{3}",
    ]
}

/// Strategy for a contact with an id unique to `index`.
pub fn contact_strategy(index: usize) -> impl Strategy<Value = ContactRecord> {
    (
        name_strategy(),
        phone_strategy(),
        any::<bool>(),
        0u32..300,
    )
        .prop_map(move |(name, phone, fav, times)| {
            ContactRecord::new(format!("c{}", index), name)
                .with_phone(phone)
                .with_favorite(fav)
                .with_times_contacted(times)
        })
}

/// Strategy for a list of contacts with distinct ids.
pub fn contacts_strategy(max: usize) -> impl Strategy<Value = Vec<ContactRecord>> {
    (0..=max).prop_flat_map(|n| (0..n).map(contact_strategy).collect::<Vec<_>>())
}
