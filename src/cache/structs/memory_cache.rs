use std::collections::HashMap;
use std::time::Duration;
use parking_lot::Mutex;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::p2p::structs::query_key::QueryKey;

/// Every read, eviction and insert happens under the one `entries` lock.
#[derive(Debug)]
pub struct MemoryCache {
    pub(crate) ttl: Duration,
    pub(crate) entries: Mutex<HashMap<QueryKey, CacheEntry>>,
}
