use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub id: String,
    pub seller_name: String,
    pub price: f64,
    pub fiat_unit: String,
    pub available_amount: f64,
    pub min_order_amount: f64,
    pub max_order_amount: f64,
    /// Percentage, rounded to two decimals.
    pub completion_rate: f64,
    pub monthly_orders: u64,
    pub payment_methods: Vec<String>,
    pub user_type: String,
    /// `online` for merchants, `offline` otherwise. Reflects the account tier, not presence.
    pub online_status: String,
}
