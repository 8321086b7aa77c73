use std::sync::Arc;
use tokio::sync::Semaphore;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::upstream::traits::listing_source::ListingSource;

pub struct P2pAggregator {
    pub config: Arc<Configuration>,
    pub source: Arc<dyn ListingSource>,
    pub cache: Arc<dyn CacheBackend>,
    /// Bounds in-flight page requests across all concurrent queries.
    pub fetch_permits: Arc<Semaphore>,
    pub stats: Arc<StatsAtomics>,
}
