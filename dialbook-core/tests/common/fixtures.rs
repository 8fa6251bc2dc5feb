// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures

use dialbook_core::ContactRecord;

pub const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// 2026-01-15T12:00:00Z
pub const NOW: u64 = 1_768_478_400_000;

pub fn contact(id: &str, name: &str, phone: &str) -> ContactRecord {
    ContactRecord::new(id, name).with_phone(phone)
}

pub fn favorite(id: &str, name: &str) -> ContactRecord {
    ContactRecord::new(id, name)
        .with_phone(format!("555-{:04}", id.len()))
        .with_favorite(true)
}

/// A small address book with one obvious duplicate pair.
pub fn address_book() -> Vec<ContactRecord> {
    vec![
        contact("1", "Alice Smith", "+1 555 0100").with_email("alice@example.com"),
        contact("2", "Bob Jones", "555-0200"),
        contact("3", "alice smith", "+1 (555) 0100").with_email("ALICE@example.com"),
        contact("4", "Carol", "555-0300").with_times_contacted(12),
        contact("5", "Dave", "555-0400").with_last_contacted_at(NOW - MILLIS_PER_DAY),
    ]
}
