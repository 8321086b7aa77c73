use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::structs::disabled_cache::DisabledCache;
use crate::cache::structs::memory_cache::MemoryCache;
use crate::cache::traits::cache_backend::CacheBackend;

impl fmt::Display for CacheEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEngine::memory => write!(f, "memory"),
            CacheEngine::disabled => write!(f, "disabled"),
        }
    }
}

impl CacheEngine {
    pub fn build(&self, ttl: u64) -> Arc<dyn CacheBackend> {
        match self {
            CacheEngine::memory => Arc::new(MemoryCache::new(Duration::from_secs(ttl))),
            CacheEngine::disabled => Arc::new(DisabledCache),
        }
    }
}
