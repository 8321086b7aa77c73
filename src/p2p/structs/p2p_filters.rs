use serde::{Deserialize, Serialize};

/// Only the filters that are active are serialized, matching `filters_applied`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct P2pFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_completion_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_orders: Option<u64>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub online_only: bool,
}
