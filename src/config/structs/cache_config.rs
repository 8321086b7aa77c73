use crate::cache::enums::cache_engine::CacheEngine;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheConfig {
    pub engine: CacheEngine,
    pub ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            engine: CacheEngine::memory,
            ttl: 30,
        }
    }
}
