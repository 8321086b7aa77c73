use serde::{Deserialize, Serialize};
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::upstream_config::UpstreamConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub api_owner: String,
    pub api_updates: String,
    pub http_server: Vec<HttpServerConfig>,
    pub upstream: UpstreamConfig,
    pub cache: CacheConfig,
    pub sentry_config: SentryConfig
}
