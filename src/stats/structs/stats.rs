use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub requests_handled: i64,
    pub validation_failures: i64,
    pub internal_errors: i64,
    pub cache_hits: i64,
    pub cache_misses: i64,
    pub pages_fetched: i64,
    pub page_failures: i64,
}
