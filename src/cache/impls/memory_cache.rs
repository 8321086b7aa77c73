use std::collections::HashMap;
use std::time::Duration;
use log::debug;
use parking_lot::Mutex;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::memory_cache::MemoryCache;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::types::CachedListings;
use crate::p2p::structs::query_key::QueryKey;

impl MemoryCache {
    pub fn new(ttl: Duration) -> MemoryCache {
        MemoryCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn evict_locked(entries: &mut HashMap<QueryKey, CacheEntry>, ttl: Duration) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(ttl));
        before - entries.len()
    }
}

impl CacheBackend for MemoryCache {
    fn get(&self, key: &QueryKey) -> Option<CachedListings> {
        let mut entries = self.entries.lock();
        if let Some(entry) = entries.get(key) {
            if entry.is_live(self.ttl) {
                debug!("[CACHE] Hit for {key}");
                return Some(entry.listings.clone());
            }
        }
        let evicted = Self::evict_locked(&mut entries, self.ttl);
        if evicted > 0 {
            debug!("[CACHE] Evicted {evicted} expired entries");
        }
        None
    }

    fn put(&self, key: QueryKey, listings: CachedListings) {
        self.entries.lock().insert(key, CacheEntry::new(listings));
    }

    fn evict_expired(&self) -> usize {
        let mut entries = self.entries.lock();
        Self::evict_locked(&mut entries, self.ttl)
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
