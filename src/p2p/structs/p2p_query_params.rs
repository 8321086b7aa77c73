use serde::{Deserialize, Serialize};

/// Query string of `/p2p` as received. Values are normalized by `P2pQuery::from_params`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct P2pQueryParams {
    #[serde(default = "P2pQueryParams::default_asset")]
    pub asset: String,
    #[serde(default = "P2pQueryParams::default_pay_type")]
    pub pay_type: String,
    #[serde(default = "P2pQueryParams::default_pay_method")]
    pub pay_method: String,
    #[serde(default = "P2pQueryParams::default_trade_type")]
    pub trade_type: String,
    #[serde(default = "P2pQueryParams::default_limit")]
    pub limit: usize,
    #[serde(default = "P2pQueryParams::default_sort_by")]
    pub sort_by: String,
    #[serde(default = "P2pQueryParams::default_order")]
    pub order: String,
    pub min_completion_rate: Option<f64>,
    pub min_orders: Option<u64>,
    pub online_only: Option<String>,
}
