// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory contact cache with a time-to-live.
//!
//! Holds the last snapshot fetched from the contact source. Reads are only
//! served while the snapshot is younger than the TTL; a stale cache reads
//! as empty and the caller is expected to refetch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::contact::ContactRecord;

/// Default snapshot lifetime (5 minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Result of a cache read that distinguishes staleness from emptiness.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// Snapshot is within its TTL (it may legitimately be empty).
    Fresh(Vec<ContactRecord>),
    /// Snapshot expired or was invalidated; refetch from the source.
    Stale,
}

#[derive(Default)]
struct CacheEntry {
    contacts: Vec<ContactRecord>,
    by_id: HashMap<String, ContactRecord>,
    /// Epoch millis of the last full replacement.
    last_updated_at: Option<u64>,
}

/// Thread-safe contact snapshot cache.
///
/// All reads and writes go through one mutex, so a full replacement is
/// never observed half-done.
pub struct ContactCache {
    entry: Mutex<CacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl Default for ContactCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactCache {
    /// Creates an empty cache using wall-clock time and the default TTL.
    pub fn new() -> Self {
        Self::with_clock(DEFAULT_CACHE_TTL, Arc::new(SystemClock))
    }

    /// Creates an empty cache with a custom TTL and time source.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        ContactCache {
            entry: Mutex::new(CacheEntry::default()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Replaces the whole snapshot and restarts the TTL.
    pub fn update_contacts(&self, contacts: Vec<ContactRecord>) {
        let now = self.clock.now_millis();
        let by_id = contacts
            .iter()
            .map(|c| (c.id().to_string(), c.clone()))
            .collect();

        let mut entry = self.entry.lock();
        entry.contacts = contacts;
        entry.by_id = by_id;
        entry.last_updated_at = Some(now);
        debug!(count = entry.contacts.len(), "contact cache replaced");
    }

    /// Returns the snapshot, or an empty list if the cache is stale.
    ///
    /// Use [`snapshot`](Self::snapshot) to tell the two cases apart.
    pub fn get_all_contacts(&self) -> Vec<ContactRecord> {
        match self.snapshot() {
            CacheLookup::Fresh(contacts) => contacts,
            CacheLookup::Stale => Vec::new(),
        }
    }

    /// Returns the snapshot tagged with its freshness.
    pub fn snapshot(&self) -> CacheLookup {
        let entry = self.entry.lock();
        if self.is_fresh(&entry) {
            CacheLookup::Fresh(entry.contacts.clone())
        } else {
            CacheLookup::Stale
        }
    }

    /// Looks up one contact; `None` if absent or the cache is stale.
    pub fn get_contact(&self, id: &str) -> Option<ContactRecord> {
        let entry = self.entry.lock();
        if !self.is_fresh(&entry) {
            return None;
        }
        entry.by_id.get(id).cloned()
    }

    /// Inserts or replaces a single contact in place.
    ///
    /// Does not extend the snapshot's lifetime.
    pub fn update_contact(&self, contact: ContactRecord) {
        let mut entry = self.entry.lock();
        match entry.contacts.iter().position(|c| c.id() == contact.id()) {
            Some(index) => entry.contacts[index] = contact.clone(),
            None => entry.contacts.push(contact.clone()),
        }
        entry.by_id.insert(contact.id().to_string(), contact);
    }

    /// Removes a contact from the snapshot.
    pub fn remove_contact(&self, id: &str) {
        let mut entry = self.entry.lock();
        entry.by_id.remove(id);
        entry.contacts.retain(|c| c.id() != id);
    }

    /// Returns true while the snapshot is younger than the TTL.
    pub fn is_cache_valid(&self) -> bool {
        let entry = self.entry.lock();
        self.is_fresh(&entry)
    }

    /// Drops the snapshot and forces the next read to be stale.
    pub fn invalidate(&self) {
        let mut entry = self.entry.lock();
        entry.contacts.clear();
        entry.by_id.clear();
        entry.last_updated_at = None;
        debug!("contact cache invalidated");
    }

    /// Number of cached contacts, regardless of freshness.
    pub fn len(&self) -> usize {
        self.entry.lock().contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        let Some(updated_at) = entry.last_updated_at else {
            return false;
        };
        let age = self.clock.now_millis().saturating_sub(updated_at);
        u128::from(age) < self.ttl.as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    const START: u64 = 1_700_000_000_000;

    fn cache() -> (ContactCache, ManualClock) {
        let clock = ManualClock::new(START);
        let cache = ContactCache::with_clock(DEFAULT_CACHE_TTL, Arc::new(clock.clone()));
        (cache, clock)
    }

    #[test]
    fn test_new_cache_is_invalid() {
        let (cache, _) = cache();
        assert!(!cache.is_cache_valid());
        assert_eq!(cache.snapshot(), CacheLookup::Stale);
    }

    #[test]
    fn test_ttl_expiry() {
        let (cache, clock) = cache();
        cache.update_contacts(vec![ContactRecord::new("1", "Amy")]);
        assert!(cache.is_cache_valid());

        clock.advance(DEFAULT_CACHE_TTL.as_millis() as u64 - 1);
        assert!(cache.is_cache_valid());

        clock.advance(1);
        assert!(!cache.is_cache_valid());
        assert!(cache.get_all_contacts().is_empty());
        assert!(cache.get_contact("1").is_none());
        // Entries are retained, only hidden.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_update_contact_replaces_in_place() {
        let (cache, _) = cache();
        cache.update_contacts(vec![
            ContactRecord::new("1", "Amy"),
            ContactRecord::new("2", "Bob"),
        ]);
        cache.update_contact(ContactRecord::new("1", "Amy").with_favorite(true));
        cache.update_contact(ContactRecord::new("3", "Cat"));

        let all = cache.get_all_contacts();
        let ids: Vec<&str> = all.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(all[0].is_favorite());
        assert!(cache.get_contact("1").unwrap().is_favorite());
    }

    #[test]
    fn test_update_contact_keeps_timestamp() {
        let (cache, clock) = cache();
        cache.update_contacts(vec![]);
        clock.advance(DEFAULT_CACHE_TTL.as_millis() as u64);
        cache.update_contact(ContactRecord::new("1", "Amy"));
        assert!(!cache.is_cache_valid());
    }

    #[test]
    fn test_remove_contact() {
        let (cache, _) = cache();
        cache.update_contacts(vec![
            ContactRecord::new("1", "Amy"),
            ContactRecord::new("2", "Bob"),
        ]);
        cache.remove_contact("1");
        assert!(cache.get_contact("1").is_none());
        assert_eq!(cache.get_all_contacts().len(), 1);
    }

    #[test]
    fn test_invalidate() {
        let (cache, _) = cache();
        cache.update_contacts(vec![ContactRecord::new("1", "Amy")]);
        cache.invalidate();
        assert!(!cache.is_cache_valid());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_fresh_empty_differs_from_stale() {
        let (cache, _) = cache();
        cache.update_contacts(Vec::new());
        assert_eq!(cache.snapshot(), CacheLookup::Fresh(Vec::new()));
        // The plain getter cannot tell them apart.
        assert!(cache.get_all_contacts().is_empty());
    }
}
