use serde::{Deserialize, Serialize};

/// Counter selector for `P2pAggregator::update_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    RequestsHandled,
    ValidationFailures,
    InternalErrors,
    CacheHits,
    CacheMisses,
    PagesFetched,
    PageFailures,
}
