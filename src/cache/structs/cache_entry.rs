use std::time::Instant;
use crate::cache::types::CachedListings;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub listings: CachedListings,
    pub inserted_at: Instant,
}
