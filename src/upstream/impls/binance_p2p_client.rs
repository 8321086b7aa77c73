use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use crate::common::common::install_crypto_provider;
use crate::config::structs::upstream_config::UpstreamConfig;
use crate::upstream::errors::UpstreamError;
use crate::upstream::structs::binance_p2p_client::BinanceP2pClient;
use crate::upstream::structs::page_request::PageRequest;
use crate::upstream::traits::listing_source::ListingSource;

impl BinanceP2pClient {
    pub fn new(config: &UpstreamConfig) -> Result<BinanceP2pClient, UpstreamError> {
        install_crypto_provider();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static("clienttype"), HeaderValue::from_static("web"));
        headers.insert(HeaderName::from_static("lang"), HeaderValue::from_static("en"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(config.max_connections_per_host)
            .pool_idle_timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(BinanceP2pClient {
            client,
            url: config.url.clone(),
            page_timeout: Duration::from_secs(config.page_timeout),
        })
    }

    /// Pulls the `data` array out of a search response. Anything else counts as an empty page.
    pub fn extract_listings(body: Value) -> Vec<Value> {
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(listings)) => listings,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}

#[async_trait]
impl ListingSource for BinanceP2pClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Value>, UpstreamError> {
        let page = request.page;
        let response = self.client
            .post(&self.url)
            .json(request)
            .timeout(self.page_timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::Timeout(page)
                } else {
                    UpstreamError::Transport { page, message: e.to_string() }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { page, status: status.as_u16() });
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout(page)
            } else {
                UpstreamError::Decode { page, message: e.to_string() }
            }
        })?;

        let listings = Self::extract_listings(body);
        debug!("[UPSTREAM] Page {} returned {} listings", page, listings.len());
        Ok(listings)
    }
}
