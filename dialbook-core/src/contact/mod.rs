// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Module
//!
//! The contact record as delivered by a contact source, plus the engines
//! that work on snapshots of records: similarity scoring, duplicate
//! detection, alphabetic sectioning and section diffing.

pub mod diff;
pub mod merge;
pub mod sections;
pub mod similarity;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Where a contact is stored on the device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// Device storage
    #[default]
    Phone,
    Google,
    /// SIM card
    Sim,
    Exchange,
    Other,
}

impl AccountKind {
    /// Classifies a raw account type string from the platform.
    ///
    /// Contacts without an account type live in device storage.
    pub fn from_account_type(account_type: Option<&str>) -> Self {
        let Some(raw) = account_type else {
            return AccountKind::Phone;
        };
        let lower = raw.to_lowercase();
        if lower.contains("google") {
            AccountKind::Google
        } else if lower.contains("sim") {
            AccountKind::Sim
        } else if lower.contains("exchange") {
            AccountKind::Exchange
        } else {
            AccountKind::Other
        }
    }
}

/// A contact as read from the device's contact store.
///
/// Records are value snapshots; `id` identifies the same logical contact
/// across refreshes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    primary_phone: String,
    #[serde(default)]
    additional_phones: Vec<String>,
    #[serde(default)]
    primary_email: Option<String>,
    #[serde(default)]
    additional_emails: Vec<String>,
    #[serde(default)]
    photo_ref: Option<String>,
    #[serde(default)]
    account_kind: AccountKind,
    #[serde(default)]
    is_favorite: bool,
    /// Epoch milliseconds, 0 = never.
    #[serde(default)]
    last_contacted_at: u64,
    #[serde(default)]
    times_contacted: u32,
    #[serde(default)]
    notes: Option<String>,
}

impl ContactRecord {
    /// Creates a record with only an id and display name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        ContactRecord {
            id: id.into(),
            name: name.into(),
            primary_phone: String::new(),
            additional_phones: Vec::new(),
            primary_email: None,
            additional_emails: Vec::new(),
            photo_ref: None,
            account_kind: AccountKind::Phone,
            is_favorite: false,
            last_contacted_at: 0,
            times_contacted: 0,
            notes: None,
        }
    }

    // ========================================
    // Builders
    // ========================================

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.primary_phone = phone.into();
        self
    }

    pub fn with_additional_phone(mut self, phone: impl Into<String>) -> Self {
        self.additional_phones.push(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.primary_email = Some(email.into());
        self
    }

    pub fn with_additional_email(mut self, email: impl Into<String>) -> Self {
        self.additional_emails.push(email.into());
        self
    }

    pub fn with_photo_ref(mut self, photo_ref: impl Into<String>) -> Self {
        self.photo_ref = Some(photo_ref.into());
        self
    }

    pub fn with_account_kind(mut self, kind: AccountKind) -> Self {
        self.account_kind = kind;
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.is_favorite = favorite;
        self
    }

    pub fn with_last_contacted_at(mut self, millis: u64) -> Self {
        self.last_contacted_at = millis;
        self
    }

    pub fn with_times_contacted(mut self, times: u32) -> Self {
        self.times_contacted = times;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Adds a phone number, filling the primary slot first.
    ///
    /// Mirrors how rows are discovered from the platform store: the first
    /// number seen becomes primary, later ones are appended.
    pub fn push_phone(&mut self, phone: impl Into<String>) {
        let phone = phone.into();
        if self.primary_phone.is_empty() {
            self.primary_phone = phone;
        } else {
            self.additional_phones.push(phone);
        }
    }

    /// Adds an email address, filling the primary slot first.
    pub fn push_email(&mut self, email: impl Into<String>) {
        let email = email.into();
        if self.primary_email.is_none() {
            self.primary_email = Some(email);
        } else {
            self.additional_emails.push(email);
        }
    }

    // ========================================
    // Accessors
    // ========================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_phone(&self) -> &str {
        &self.primary_phone
    }

    pub fn additional_phones(&self) -> &[String] {
        &self.additional_phones
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.primary_email.as_deref()
    }

    pub fn additional_emails(&self) -> &[String] {
        &self.additional_emails
    }

    pub fn photo_ref(&self) -> Option<&str> {
        self.photo_ref.as_deref()
    }

    pub fn account_kind(&self) -> AccountKind {
        self.account_kind
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Sets the favorite flag. Only the favorite toggle should call this.
    pub fn set_favorite(&mut self, favorite: bool) {
        self.is_favorite = favorite;
    }

    pub fn last_contacted_at(&self) -> u64 {
        self.last_contacted_at
    }

    pub fn times_contacted(&self) -> u32 {
        self.times_contacted
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    // ========================================
    // Derived helpers
    // ========================================

    /// Returns the alphabetic section this contact sorts under.
    ///
    /// `A`..`Z` for names starting with an ASCII letter, `#` otherwise.
    pub fn section_character(&self) -> String {
        let Some(first) = self.name.chars().next() else {
            return "#".to_string();
        };
        // Characters that uppercase to several (e.g. 'ﬀ' -> "FF") stay as-is.
        let mut upper = first.to_uppercase();
        let first = match (upper.next(), upper.next()) {
            (Some(c), None) => c,
            _ => first,
        };
        if first.is_ascii_uppercase() {
            first.to_string()
        } else {
            "#".to_string()
        }
    }

    /// Primary phone (if set) followed by the additional ones.
    pub fn all_phones(&self) -> Vec<&str> {
        std::iter::once(self.primary_phone.as_str())
            .filter(|p| !p.is_empty())
            .chain(self.additional_phones.iter().map(String::as_str))
            .collect()
    }

    /// Primary email (if any) followed by the additional ones.
    pub fn all_emails(&self) -> Vec<&str> {
        self.primary_email
            .iter()
            .chain(self.additional_emails.iter())
            .map(String::as_str)
            .collect()
    }

    /// Rejects records that cannot be identified.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::InvalidRecord(format!(
                "contact '{}' has an empty id",
                self.name
            )));
        }
        Ok(())
    }
}

/// Reduces a phone number to digits and `+` for equality comparison.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Formats a typed number for the dialer display.
///
/// Numbers longer than ten characters are reformatted from their digits:
/// eleven digits as `+C (AAA) BBB-CCCC`, ten as `(AAA) BBB-CCCC`. Numbers
/// already starting with `+`, short input and other digit counts are
/// returned unchanged.
pub fn format_phone_number(number: &str) -> String {
    if number.starts_with('+') || number.chars().count() <= 10 {
        return number.to_string();
    }

    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        11 => format!(
            "+{} ({}) {}-{}",
            &digits[..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        ),
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => number.to_string(),
    }
}

/// Whether a typed number is long enough to dial: at least ten digits or
/// `+` characters once formatting is stripped.
pub fn is_valid_phone_number(number: &str) -> bool {
    normalize_phone(number).len() >= 10
}
