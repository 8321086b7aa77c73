use std::fmt;
use crate::p2p::structs::query_key::QueryKey;

impl QueryKey {
    pub fn new(asset: &str, pay_type: &str, trade_type: &str, pay_method: &str, limit: usize) -> QueryKey {
        QueryKey(format!("{asset}_{pay_type}_{trade_type}_{pay_method}_{limit}"))
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
