//! Response cache for aggregated upstream listings.
//!
//! The cache shields the upstream listing endpoint from repeated identical queries.
//! It is keyed by a [`QueryKey`](crate::p2p::structs::query_key::QueryKey) built only
//! from the parameters that change the upstream call (asset, fiat, trade direction,
//! payment method, limit) and stores the merged, not yet filtered listing set. Filters,
//! sorting and statistics are applied on every request, so requests that differ only in
//! those parameters share one entry without serving each other's output.
//!
//! # Engines
//!
//! - **memory**: Process-local map guarded by a single mutex, with a fixed TTL
//! - **disabled**: Never stores anything; every lookup is a miss
//!
//! Expired entries are removed lazily: a lookup that misses evicts every expired
//! entry while it holds the lock. There is no background sweeper.
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_aggregator::cache::enums::cache_engine::CacheEngine;
//!
//! let cache = CacheEngine::memory.build(30);
//! if let Some(listings) = cache.get(&key) {
//!     // served from cache
//! }
//! ```

/// Cache engine enumeration (memory, disabled).
pub mod enums;

/// Implementation blocks for the cache engines.
pub mod impls;

/// Data structures for cache engines and entries.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;

/// Type aliases for cached values.
pub mod types;

#[cfg(test)]
mod tests;
