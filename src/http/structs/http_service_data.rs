use std::sync::Arc;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::p2p::structs::p2p_aggregator::P2pAggregator;

pub struct HttpServiceData {
    pub aggregator: Arc<P2pAggregator>,
    pub http_server_config: Arc<HttpServerConfig>
}
