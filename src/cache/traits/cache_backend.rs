use crate::cache::types::CachedListings;
use crate::p2p::structs::query_key::QueryKey;

pub trait CacheBackend: Send + Sync {
    /// Returns the live entry for `key`. A miss evicts every expired entry.
    fn get(&self, key: &QueryKey) -> Option<CachedListings>;

    fn put(&self, key: QueryKey, listings: CachedListings);

    /// Removes every expired entry and returns how many were removed.
    fn evict_expired(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
