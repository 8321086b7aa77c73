use crate::upstream::structs::page_request::PageRequest;

impl PageRequest {
    pub fn new(asset: &str, fiat: &str, trade_type: &str, pay_method: Option<&str>, page: usize, rows: usize) -> PageRequest {
        PageRequest {
            asset: asset.to_string(),
            fiat: fiat.to_string(),
            trade_type: trade_type.to_string(),
            page,
            rows,
            pay_types: pay_method.map(|method| vec![method.to_string()]).unwrap_or_default(),
            publisher_type: None,
            merchant_check: false,
        }
    }
}
