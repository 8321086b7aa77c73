use std::sync::atomic::{AtomicI64, Ordering};
use crate::p2p::structs::p2p_aggregator::P2pAggregator;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl P2pAggregator {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            requests_handled: self.stats.requests_handled.load(Ordering::SeqCst),
            validation_failures: self.stats.validation_failures.load(Ordering::SeqCst),
            internal_errors: self.stats.internal_errors.load(Ordering::SeqCst),
            cache_hits: self.stats.cache_hits.load(Ordering::SeqCst),
            cache_misses: self.stats.cache_misses.load(Ordering::SeqCst),
            pages_fetched: self.stats.pages_fetched.load(Ordering::SeqCst),
            page_failures: self.stats.page_failures.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter: &AtomicI64 = match event {
            StatsEvent::RequestsHandled => &self.stats.requests_handled,
            StatsEvent::ValidationFailures => &self.stats.validation_failures,
            StatsEvent::InternalErrors => &self.stats.internal_errors,
            StatsEvent::CacheHits => &self.stats.cache_hits,
            StatsEvent::CacheMisses => &self.stats.cache_misses,
            StatsEvent::PagesFetched => &self.stats.pages_fetched,
            StatsEvent::PageFailures => &self.stats.page_failures,
        };
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    /// Seconds since the aggregator was created.
    pub fn uptime_seconds(&self) -> i64
    {
        chrono::Utc::now().timestamp() - self.stats.started.load(Ordering::SeqCst)
    }
}
