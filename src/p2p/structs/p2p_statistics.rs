use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct P2pStatistics {
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub total_available: f64,
}
