#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::cache::structs::disabled_cache::DisabledCache;
    use crate::config::structs::configuration::Configuration;
    use crate::p2p::structs::p2p_aggregator::P2pAggregator;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::upstream::traits::listing_source::MockListingSource;

    fn aggregator() -> P2pAggregator {
        P2pAggregator::new(
            Arc::new(Configuration::init()),
            Arc::new(MockListingSource::new()),
            Arc::new(DisabledCache),
        )
    }

    #[test]
    fn test_fresh_counters_are_zero() {
        let stats = aggregator().get_stats();
        assert_eq!(stats.requests_handled, 0);
        assert_eq!(stats.cache_hits, 0);
        assert_eq!(stats.page_failures, 0);
        assert!(stats.started > 0);
    }

    #[test]
    fn test_update_stats_adds_and_subtracts() {
        let aggregator = aggregator();
        aggregator.update_stats(StatsEvent::PagesFetched, 5);
        let stats = aggregator.update_stats(StatsEvent::PagesFetched, -2);
        assert_eq!(stats.pages_fetched, 3);
        assert_eq!(stats.page_failures, 0);
    }

    #[test]
    fn test_update_stats_touches_only_selected_counter() {
        let aggregator = aggregator();
        let stats = aggregator.update_stats(StatsEvent::ValidationFailures, 1);
        assert_eq!(stats.validation_failures, 1);
        assert_eq!(stats.requests_handled, 0);
        assert_eq!(stats.internal_errors, 0);
    }

    #[test]
    fn test_stats_serialize_snake_case() {
        let json = serde_json::to_value(aggregator().get_stats()).unwrap();
        assert!(json.get("cache_misses").is_some());
        assert!(json.get("requests_handled").is_some());
    }
}
