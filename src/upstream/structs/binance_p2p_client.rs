use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BinanceP2pClient {
    pub(crate) client: reqwest::Client,
    pub(crate) url: String,
    pub(crate) page_timeout: Duration,
}
