use serde::Serialize;
use crate::http::structs::p2p_parameters::P2pParameters;
use crate::p2p::structs::listing_record::ListingRecord;

#[derive(Serialize, Debug)]
pub struct P2pEmptyResponse<'a> {
    pub success: bool,
    pub message: &'static str,
    pub data: &'static [ListingRecord],
    pub count: usize,
    pub total_sellers: usize,
    pub time_taken: f64,
    pub trade_type: &'a str,
    pub api_owner: &'a str,
    pub api_updates: &'a str,
    pub parameters: P2pParameters<'a>,
    pub timestamp: String,
    pub cache_status: &'static str,
}
