pub mod cache_engine;
pub mod cache_entry;
pub mod disabled_cache;
pub mod memory_cache;
