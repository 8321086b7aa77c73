use serde::{Deserialize, Serialize};

/// Settings for the paginated P2P listing endpoint.
///
/// Timeouts are in seconds. `max_connections_per_host` also bounds how many
/// page requests of a single query are in flight at once.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpstreamConfig {
    pub url: String,
    pub user_agent: String,
    pub page_size: usize,
    pub page_cap: usize,
    pub page_timeout: u64,
    pub total_timeout: u64,
    pub max_connections: usize,
    pub max_connections_per_host: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "https://p2p.binance.com/bapi/c2c/v2/friendly/c2c/adv/search".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            page_size: 20,
            page_cap: 50,
            page_timeout: 15,
            total_timeout: 45,
            max_connections: 30,
            max_connections_per_host: 15,
        }
    }
}
