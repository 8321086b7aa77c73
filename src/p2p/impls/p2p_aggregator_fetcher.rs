use std::time::Duration;
use futures_util::stream::{FuturesUnordered, StreamExt};
use log::{info, warn};
use serde_json::Value;
use tokio::time::{timeout, timeout_at, Instant};
use crate::p2p::structs::p2p_aggregator::P2pAggregator;
use crate::p2p::structs::p2p_query::P2pQuery;
use crate::stats::enums::stats_event::StatsEvent;
use crate::upstream::errors::UpstreamError;

/// `min(ceil(desired / page_size), page_cap)`.
pub fn page_count(desired: usize, page_size: usize, page_cap: usize) -> usize
{
    if page_size == 0 {
        return 0;
    }
    desired.div_ceil(page_size).min(page_cap)
}

impl P2pAggregator {
    /// Fetches every needed page concurrently and concatenates them in page order,
    /// truncated to `query.limit`.
    ///
    /// A failed or timed out page contributes nothing. Pages still pending when the
    /// overall deadline passes are dropped and count as empty.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_listings(&self, query: &P2pQuery) -> Vec<Value>
    {
        let upstream = &self.config.upstream;
        let pages = page_count(query.limit, upstream.page_size, upstream.page_cap);
        if pages == 0 {
            return Vec::new();
        }

        info!("[P2P] Fetching {pages} pages concurrently...");
        let page_timeout = Duration::from_secs(upstream.page_timeout);
        let deadline = Instant::now() + Duration::from_secs(upstream.total_timeout);

        let mut pending: FuturesUnordered<_> = (1..=pages).map(|page| {
            let request = query.page_request(page, upstream.page_size);
            let source = self.source.clone();
            let permits = self.fetch_permits.clone();
            async move {
                let _permit = permits.acquire_owned().await.ok();
                let result = match timeout(page_timeout, source.fetch_page(&request)).await {
                    Ok(result) => result,
                    Err(_) => Err(UpstreamError::Timeout(page)),
                };
                (page, result)
            }
        }).collect();

        let mut slots: Vec<Option<Vec<Value>>> = vec![None; pages];
        loop {
            match timeout_at(deadline, pending.next()).await {
                Ok(Some((page, Ok(listings)))) => {
                    self.update_stats(StatsEvent::PagesFetched, 1);
                    slots[page - 1] = Some(listings);
                }
                Ok(Some((_, Err(error)))) => {
                    self.update_stats(StatsEvent::PageFailures, 1);
                    warn!("[UPSTREAM] {error}");
                }
                Ok(None) => break,
                Err(_) => {
                    self.update_stats(StatsEvent::PageFailures, pending.len() as i64);
                    warn!("[UPSTREAM] Deadline reached with {} pages pending, using completed pages", pending.len());
                    break;
                }
            }
        }

        let mut listings: Vec<Value> = slots.into_iter().flatten().flatten().collect();
        info!("[P2P] Fetched {} total sellers", listings.len());
        listings.truncate(query.limit);
        listings
    }
}
