// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dialbook Core Library
//!
//! Contact engine for the Dialbook phone app: duplicate detection,
//! alphabetic sectioning, a time-bounded snapshot cache and smart
//! suggestions. Platform storage is reached through the [`ContactSource`]
//! and [`FavoriteStore`] traits.

pub mod cache;
pub mod calllog;
pub mod clock;
pub mod config;
pub mod contact;
pub mod error;
pub mod repository;
pub mod source;
pub mod storage;
pub mod suggestions;

pub use cache::{CacheLookup, ContactCache, DEFAULT_CACHE_TTL};
pub use calllog::{build_call_sections, CallEntry, CallKind, CallRecord};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EngineConfig;
pub use contact::diff::{diff_sections, SectionChange};
pub use contact::merge::{find_duplicates, DuplicateGroup, DEFAULT_DUPLICATE_THRESHOLD};
pub use contact::sections::{build_sections, sort_for_sections, SectionEntry, FAVORITES_HEADER};
pub use contact::similarity::{levenshtein_distance, similarity_score, string_similarity};
pub use contact::{
    format_phone_number, is_valid_phone_number, normalize_phone, AccountKind, ContactRecord,
};
pub use error::{CoreError, CoreResult};
pub use repository::ContactRepository;
pub use source::{ContactSource, JsonFileSource, StaticContactSource};
pub use storage::{
    FavoriteStore, MemoryStore, SearchHistoryItem, SearchHistoryStore, Storage, StorageError,
};
pub use suggestions::{rank_suggestions, SmartSuggestion, SuggestionRanker, SuggestionReason};
