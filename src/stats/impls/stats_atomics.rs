use std::sync::atomic::AtomicI64;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(chrono::Utc::now().timestamp()),
            requests_handled: AtomicI64::new(0),
            validation_failures: AtomicI64::new(0),
            internal_errors: AtomicI64::new(0),
            cache_hits: AtomicI64::new(0),
            cache_misses: AtomicI64::new(0),
            pages_fetched: AtomicI64::new(0),
            page_failures: AtomicI64::new(0),
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}
