//! Configuration for the contact engine

use std::time::Duration;

/// Tunables for caching, duplicate detection, suggestions and search history.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum age of a cached contact snapshot
    pub cache_ttl: Duration,

    /// Minimum similarity for two contacts to be grouped as duplicates
    pub duplicate_threshold: f32,

    /// Default number of suggestions returned
    pub suggestion_limit: usize,

    /// How many top contacts by call count are considered for suggestions
    pub frequent_candidates: usize,

    /// How many most-recent contacts are considered for suggestions
    pub recent_candidates: usize,

    /// Maximum number of remembered search queries
    pub search_history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(5 * 60), // 5 minutes
            duplicate_threshold: 0.7,
            suggestion_limit: 5,
            frequent_candidates: 5,
            recent_candidates: 5,
            search_history_limit: 20,
        }
    }
}

impl EngineConfig {
    /// Override the cache TTL
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Override the duplicate threshold
    ///
    /// Values outside `[0, 1]` are clamped.
    pub fn with_duplicate_threshold(mut self, threshold: f32) -> Self {
        self.duplicate_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Override the default suggestion limit
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Override the search history bound
    pub fn with_search_history_limit(mut self, limit: usize) -> Self {
        self.search_history_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.duplicate_threshold, 0.7);
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.search_history_limit, 20);
    }

    #[test]
    fn test_threshold_is_clamped() {
        let config = EngineConfig::default().with_duplicate_threshold(1.5);
        assert_eq!(config.duplicate_threshold, 1.0);
    }
}
