use crate::cache::structs::disabled_cache::DisabledCache;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::types::CachedListings;
use crate::p2p::structs::query_key::QueryKey;

impl CacheBackend for DisabledCache {
    fn get(&self, _key: &QueryKey) -> Option<CachedListings> {
        None
    }

    fn put(&self, _key: QueryKey, _listings: CachedListings) {}

    fn evict_expired(&self) -> usize {
        0
    }

    fn len(&self) -> usize {
        0
    }
}
