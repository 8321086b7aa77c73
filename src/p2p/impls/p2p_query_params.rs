use crate::p2p::structs::p2p_query_params::P2pQueryParams;

impl P2pQueryParams {
    pub fn default_asset() -> String { String::from("USDT") }
    pub fn default_pay_type() -> String { String::from("BDT") }
    pub fn default_pay_method() -> String { String::from("ALL") }
    pub fn default_trade_type() -> String { String::from("SELL") }
    pub fn default_limit() -> usize { 100 }
    pub fn default_sort_by() -> String { String::from("price") }
    pub fn default_order() -> String { String::from("asc") }
}

impl Default for P2pQueryParams {
    fn default() -> Self {
        Self {
            asset: Self::default_asset(),
            pay_type: Self::default_pay_type(),
            pay_method: Self::default_pay_method(),
            trade_type: Self::default_trade_type(),
            limit: Self::default_limit(),
            sort_by: Self::default_sort_by(),
            order: Self::default_order(),
            min_completion_rate: None,
            min_orders: None,
            online_only: None,
        }
    }
}
