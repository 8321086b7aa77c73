use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub requests_handled: AtomicI64,
    pub validation_failures: AtomicI64,
    pub internal_errors: AtomicI64,
    pub cache_hits: AtomicI64,
    pub cache_misses: AtomicI64,
    pub pages_fetched: AtomicI64,
    pub page_failures: AtomicI64,
}
