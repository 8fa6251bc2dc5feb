// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Repository
//!
//! Ties a contact source, the snapshot cache and the local favorite/search
//! store together, and exposes the list, search, duplicate and suggestion
//! operations the app screens call.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{CacheLookup, ContactCache};
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::contact::merge::{find_duplicates, DuplicateGroup};
use crate::contact::sections::{build_sections, sort_for_sections, SectionEntry};
use crate::contact::{normalize_phone, ContactRecord};
use crate::error::CoreError;
use crate::source::ContactSource;
use crate::storage::{FavoriteStore, SearchHistoryItem, SearchHistoryStore};
use crate::suggestions::{SmartSuggestion, SuggestionRanker};

/// Contact access for the app layer.
pub struct ContactRepository<S, P> {
    source: S,
    store: P,
    cache: Arc<ContactCache>,
    config: EngineConfig,
    clock: Arc<dyn Clock>,
}

impl<S, P> ContactRepository<S, P>
where
    S: ContactSource,
    P: FavoriteStore + SearchHistoryStore,
{
    /// Creates a repository whose cache lives for `config.cache_ttl`.
    pub fn new(source: S, store: P, config: EngineConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self {
            source,
            store,
            cache: Arc::new(ContactCache::with_clock(config.cache_ttl, clock.clone())),
            config,
            clock,
        }
    }

    /// Uses `clock` for cache expiry, recency scoring and search timestamps.
    ///
    /// Replaces the cache, so call it before sharing [`cache`](Self::cache).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.cache = Arc::new(ContactCache::with_clock(
            self.config.cache_ttl,
            clock.clone(),
        ));
        self.clock = clock;
        self
    }

    pub fn cache(&self) -> &Arc<ContactCache> {
        &self.cache
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns all contacts with a phone number.
    ///
    /// Served from the cache while it is fresh and non-empty; otherwise the
    /// source is fetched, favorites are applied and the cache is replaced.
    pub fn contacts(&self, force_refresh: bool) -> Result<Vec<ContactRecord>, CoreError> {
        if !force_refresh {
            if let CacheLookup::Fresh(cached) = self.cache.snapshot() {
                if !cached.is_empty() {
                    return Ok(cached);
                }
            }
        }

        let favorites = self.store.favorite_ids()?;
        let fetched = self.source.fetch_contacts()?;
        let total = fetched.len();

        let mut contacts = Vec::with_capacity(total);
        for mut record in fetched {
            record.validate()?;
            if record.all_phones().is_empty() {
                continue;
            }
            let favorite = favorites.contains(record.id());
            record.set_favorite(favorite);
            contacts.push(record);
        }

        info!(
            fetched = total,
            kept = contacts.len(),
            "refreshed contacts from source"
        );
        self.cache.update_contacts(contacts.clone());
        Ok(contacts)
    }

    /// Looks up one contact, refreshing from the source if the cache is stale.
    pub fn get_contact(&self, contact_id: &str) -> Result<ContactRecord, CoreError> {
        if let Some(record) = self.cache.get_contact(contact_id) {
            return Ok(record);
        }
        self.contacts(false)?
            .into_iter()
            .find(|c| c.id() == contact_id)
            .ok_or_else(|| CoreError::ContactNotFound(contact_id.to_string()))
    }

    /// Finds the contact owning a dialed number.
    ///
    /// Numbers are compared after [`normalize_phone`], against primary and
    /// additional phones. Input without any digits matches nothing.
    pub fn lookup_number(&self, number: &str) -> Result<Option<ContactRecord>, CoreError> {
        let wanted = normalize_phone(number);
        if wanted.is_empty() {
            return Ok(None);
        }

        let found = self.contacts(false)?.into_iter().find(|c| {
            c.all_phones()
                .into_iter()
                .any(|p| normalize_phone(p) == wanted)
        });
        debug!(found = found.is_some(), "number lookup");
        Ok(found)
    }

    /// Contacts sorted and split into favorite and alphabetic sections.
    pub fn sorted_sections(&self, force_refresh: bool) -> Result<Vec<SectionEntry>, CoreError> {
        let mut contacts = self.contacts(force_refresh)?;
        sort_for_sections(&mut contacts);
        Ok(build_sections(&contacts))
    }

    /// Finds contacts by name, phone or email.
    ///
    /// Name and email match case-insensitively, phone numbers as typed. A
    /// non-empty query is remembered in the search history.
    pub fn search(&self, query: &str) -> Result<Vec<ContactRecord>, CoreError> {
        if query.is_empty() {
            return self.contacts(false);
        }

        self.store.record_search(
            query,
            self.clock.now_millis(),
            self.config.search_history_limit,
        )?;

        let needle = query.to_lowercase();
        let matches: Vec<ContactRecord> = self
            .contacts(false)?
            .into_iter()
            .filter(|c| {
                c.name().to_lowercase().contains(&needle)
                    || c.all_phones().iter().any(|p| p.contains(query))
                    || c
                        .all_emails()
                        .iter()
                        .any(|e| e.to_lowercase().contains(&needle))
            })
            .collect();

        debug!(query, matches = matches.len(), "contact search");
        Ok(matches)
    }

    /// Flips a contact's favorite flag and returns the new state.
    ///
    /// The cached record, if any, is patched so lists reflect the change
    /// without a refetch.
    pub fn toggle_favorite(&self, contact_id: &str) -> Result<bool, CoreError> {
        let mut favorites = self.store.favorite_ids()?;
        let is_favorite = if favorites.remove(contact_id) {
            false
        } else {
            favorites.insert(contact_id.to_string());
            true
        };
        self.store.save_favorite_ids(&favorites)?;

        if let Some(mut record) = self.cache.get_contact(contact_id) {
            record.set_favorite(is_favorite);
            self.cache.update_contact(record);
        }

        info!(contact_id, is_favorite, "toggled favorite");
        Ok(is_favorite)
    }

    /// Duplicate groups over the current contacts at the configured threshold.
    pub fn detect_duplicates(&self) -> Result<Vec<DuplicateGroup>, CoreError> {
        let contacts = self.contacts(false)?;
        find_duplicates(&contacts, self.config.duplicate_threshold)
    }

    /// Ranked suggestions over the current contacts.
    pub fn smart_suggestions(&self, limit: usize) -> Result<Vec<SmartSuggestion>, CoreError> {
        let contacts = self.contacts(false)?;
        let ranker = SuggestionRanker {
            frequent_candidates: self.config.frequent_candidates,
            recent_candidates: self.config.recent_candidates,
        };
        Ok(ranker.rank(&contacts, limit, self.clock.now_millis()))
    }

    pub fn search_history(&self) -> Result<Vec<SearchHistoryItem>, CoreError> {
        Ok(self.store.search_history()?)
    }

    pub fn clear_search_history(&self) -> Result<(), CoreError> {
        Ok(self.store.clear_search_history()?)
    }

    /// Must be called after the underlying contact store changes.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}
