//! Cache engine structures.

/// A cached listing set with its insertion time.
pub mod cache_entry;

/// Process-local TTL cache.
pub mod memory_cache;

/// Cache engine that stores nothing.
pub mod disabled_cache;
