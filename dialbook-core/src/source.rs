// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Sources
//!
//! The engine never talks to the platform contact store directly. A
//! [`ContactSource`] hands it a full snapshot on demand.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::contact::ContactRecord;
use crate::error::CoreError;

/// Supplies full contact snapshots.
pub trait ContactSource: Send + Sync {
    fn fetch_contacts(&self) -> Result<Vec<ContactRecord>, CoreError>;
}

/// In-memory source, for fixtures and tests.
#[derive(Default)]
pub struct StaticContactSource {
    contacts: Mutex<Vec<ContactRecord>>,
    fetches: Mutex<usize>,
}

impl StaticContactSource {
    pub fn new(contacts: Vec<ContactRecord>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            fetches: Mutex::new(0),
        }
    }

    /// Replaces what subsequent fetches return.
    pub fn set_contacts(&self, contacts: Vec<ContactRecord>) {
        *self.contacts.lock() = contacts;
    }

    /// Number of times the source has been fetched.
    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock()
    }
}

impl ContactSource for StaticContactSource {
    fn fetch_contacts(&self) -> Result<Vec<ContactRecord>, CoreError> {
        *self.fetches.lock() += 1;
        Ok(self.contacts.lock().clone())
    }
}

/// Reads a JSON array of contact records from disk on every fetch.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactSource for JsonFileSource {
    fn fetch_contacts(&self) -> Result<Vec<ContactRecord>, CoreError> {
        let data = std::fs::read_to_string(&self.path)?;
        let contacts: Vec<ContactRecord> = serde_json::from_str(&data)?;
        Ok(contacts)
    }
}
