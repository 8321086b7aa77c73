use serde::{Deserialize, Serialize};

/// Body of a single search request. `pay_types` is empty when every payment
/// method is accepted, otherwise it holds the method's display name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub asset: String,
    pub fiat: String,
    pub trade_type: String,
    pub page: usize,
    pub rows: usize,
    pub pay_types: Vec<String>,
    pub publisher_type: Option<String>,
    pub merchant_check: bool,
}
