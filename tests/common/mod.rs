#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use serde_json::{json, Value};
use tempfile::TempDir;
use p2p_aggregator::cache::enums::cache_engine::CacheEngine;
use p2p_aggregator::config::structs::configuration::Configuration;
use p2p_aggregator::config::structs::http_server_config::HttpServerConfig;
use p2p_aggregator::http::structs::http_service_data::HttpServiceData;
use p2p_aggregator::p2p::structs::p2p_aggregator::P2pAggregator;
use p2p_aggregator::upstream::errors::UpstreamError;
use p2p_aggregator::upstream::structs::page_request::PageRequest;
use p2p_aggregator::upstream::traits::listing_source::ListingSource;

/// Serves fixed pages by page number and counts every call.
pub struct ScriptedSource {
    pub pages: HashMap<usize, Result<Vec<Value>, UpstreamError>>,
    pub calls: AtomicUsize,
    pub requests: parking_lot::Mutex<Vec<PageRequest>>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<(usize, Result<Vec<Value>, UpstreamError>)>) -> ScriptedSource {
        ScriptedSource {
            pages: pages.into_iter().collect(),
            calls: AtomicUsize::new(0),
            requests: parking_lot::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingSource for ScriptedSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Value>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());
        self.pages.get(&request.page).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn listing(id: &str, price: f64, finish_rate: f64, orders: u64, user_type: &str) -> Value {
    json!({
        "adv": {
            "advNo": id,
            "price": format!("{price:.2}"),
            "fiatUnit": "BDT",
            "surplusAmount": "250.00",
            "minSingleTransAmount": "500.00",
            "maxSingleTransAmount": "25000.00",
            "tradeMethods": [{"tradeMethodName": "bKash"}]
        },
        "advertiser": {
            "nickName": format!("seller-{id}"),
            "monthFinishRate": finish_rate,
            "monthOrderCount": orders,
            "userType": user_type
        }
    })
}

pub fn create_test_config(page_size: usize) -> Configuration {
    let mut config = Configuration::init();
    config.upstream.page_size = page_size;
    config.upstream.page_timeout = 2;
    config.upstream.total_timeout = 4;
    config.cache.engine = CacheEngine::memory;
    config
}

pub fn create_test_http_config() -> Arc<HttpServerConfig> {
    Arc::new(HttpServerConfig {
        enabled: true,
        bind_address: "127.0.0.1:8000".to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
        ssl: false,
        ssl_key: String::new(),
        ssl_cert: String::new(),
    })
}

pub fn create_test_service_data(config: Configuration, source: Arc<ScriptedSource>) -> Arc<HttpServiceData> {
    let config = Arc::new(config);
    let cache = config.cache.engine.build(config.cache.ttl);
    Arc::new(HttpServiceData {
        aggregator: Arc::new(P2pAggregator::new(config, source, cache)),
        http_server_config: create_test_http_config(),
    })
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}
