// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core Error Types
//!
//! Unified error type for the Dialbook engine.

use thiserror::Error;

use crate::storage::StorageError;

/// Unified error type for Dialbook operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A record failed shape validation (e.g. empty id).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// The external contact source failed.
    #[error("contact source error: {0}")]
    Source(String),

    /// Favorite or history persistence failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// I/O failure while reading a snapshot file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Contact not found.
    #[error("contact not found: {0}")]
    ContactNotFound(String),
}

/// Result alias used throughout the crate.
pub type CoreResult<T> = Result<T, CoreError>;
