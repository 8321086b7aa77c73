use std::sync::Arc;
use log::{debug, info};
use tokio::sync::Semaphore;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::types::CachedListings;
use crate::config::structs::configuration::Configuration;
use crate::p2p::enums::p2p_search_result::P2pSearchResult;
use crate::p2p::structs::p2p_aggregator::P2pAggregator;
use crate::p2p::structs::p2p_listing_page::P2pListingPage;
use crate::p2p::structs::p2p_query::P2pQuery;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::upstream::errors::UpstreamError;
use crate::upstream::structs::binance_p2p_client::BinanceP2pClient;
use crate::upstream::traits::listing_source::ListingSource;

impl P2pAggregator {
    pub fn new(config: Arc<Configuration>, source: Arc<dyn ListingSource>, cache: Arc<dyn CacheBackend>) -> P2pAggregator
    {
        let permits = config.upstream.max_connections.min(config.upstream.max_connections_per_host).max(1);
        P2pAggregator {
            config,
            source,
            cache,
            fetch_permits: Arc::new(Semaphore::new(permits)),
            stats: Arc::new(StatsAtomics::new()),
        }
    }

    /// Wires the HTTP upstream client and the configured cache engine.
    pub fn from_config(config: Arc<Configuration>) -> Result<P2pAggregator, UpstreamError>
    {
        let source = Arc::new(BinanceP2pClient::new(&config.upstream)?);
        let cache = config.cache.engine.build(config.cache.ttl);
        info!("[P2P] Upstream {} with {} cache (ttl {}s)", config.upstream.url, config.cache.engine, config.cache.ttl);
        Ok(P2pAggregator::new(config, source, cache))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn search(&self, query: &P2pQuery) -> P2pSearchResult
    {
        info!("[P2P] Fetching P2P data: {}/{} - {} - {}", query.asset, query.pay_type, query.trade_type, query.pay_method);
        let listings = self.listings(query).await;
        if listings.is_empty() {
            return P2pSearchResult::NoSellers;
        }
        P2pSearchResult::Found(P2pListingPage::build(&listings, query))
    }

    /// Merged upstream listings for `query`, served from the cache while live.
    ///
    /// The fetch runs without holding the cache lock, so concurrent misses on one key may
    /// each fetch; the last insert wins. Empty results are not cached.
    pub async fn listings(&self, query: &P2pQuery) -> CachedListings
    {
        let key = query.cache_key();
        if let Some(listings) = self.cache.get(&key) {
            debug!("[P2P] Cache hit for {key}");
            self.update_stats(StatsEvent::CacheHits, 1);
            return listings;
        }
        self.update_stats(StatsEvent::CacheMisses, 1);

        let listings = Arc::new(self.fetch_listings(query).await);
        if !listings.is_empty() {
            self.cache.put(key, listings.clone());
        }
        listings
    }
}
