// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Call History
//!
//! Call records as read from the platform call log, grouped under
//! "Today" / "Yesterday" / calendar-date headers for display.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Direction/outcome of a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallKind {
    Incoming,
    Outgoing,
    Missed,
}

/// One call-log entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: String,
    pub phone_number: String,
    pub contact_name: Option<String>,
    pub kind: CallKind,
    /// Epoch milliseconds.
    pub timestamp_ms: i64,
    pub duration_secs: u64,
}

impl CallRecord {
    /// Duration as `M:SS`.
    pub fn formatted_duration(&self) -> String {
        let minutes = self.duration_secs / 60;
        let seconds = self.duration_secs % 60;
        format!("{}:{:02}", minutes, seconds)
    }

    /// Time of day as `h:MM AM`, in `tz`.
    pub fn formatted_time<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp_ms)
            .unwrap_or_default()
            .with_timezone(tz)
            .format("%-I:%M %p")
            .to_string()
    }

    /// Name to show for the call, falling back to the number.
    pub fn display_name(&self) -> &str {
        match self.contact_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.phone_number,
        }
    }

    /// Section label relative to `now`, in `now`'s timezone.
    pub fn date_section<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        let tz = now.timezone();
        let called_at = DateTime::<Utc>::from_timestamp_millis(self.timestamp_ms)
            .unwrap_or_default()
            .with_timezone(&tz);

        let today = now.date_naive();
        let call_day = called_at.date_naive();

        if call_day >= today {
            "Today".to_string()
        } else if Some(call_day) == today.pred_opt() {
            "Yesterday".to_string()
        } else {
            called_at.format("%B %d, %Y").to_string()
        }
    }
}

/// One row of the sectioned call history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CallEntry {
    Header(String),
    Call(CallRecord),
}

/// Groups calls (newest first) under date headers.
///
/// A header is emitted whenever the date section changes, so input that is
/// not sorted by time yields repeated headers.
pub fn build_call_sections<Tz: TimeZone>(calls: &[CallRecord], now: &DateTime<Tz>) -> Vec<CallEntry>
where
    Tz::Offset: std::fmt::Display,
{
    let mut entries = Vec::with_capacity(calls.len() + 8);
    let mut current: Option<String> = None;

    for call in calls {
        let section = call.date_section(now);
        if current.as_deref() != Some(section.as_str()) {
            entries.push(CallEntry::Header(section.clone()));
            current = Some(section);
        }
        entries.push(CallEntry::Call(call.clone()));
    }

    entries
}
