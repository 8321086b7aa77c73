use std::time::{Duration, Instant};
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::types::CachedListings;

impl CacheEntry {
    pub fn new(listings: CachedListings) -> CacheEntry {
        CacheEntry {
            listings,
            inserted_at: Instant::now(),
        }
    }

    pub fn is_live(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() < ttl
    }
}
