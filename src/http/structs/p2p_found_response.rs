use serde::Serialize;
use crate::http::structs::p2p_parameters::P2pParameters;
use crate::p2p::structs::listing_record::ListingRecord;
use crate::p2p::structs::p2p_statistics::P2pStatistics;

#[derive(Serialize, Debug)]
pub struct P2pFoundResponse<'a> {
    pub success: bool,
    pub data: &'a [ListingRecord],
    pub count: usize,
    pub total_found: usize,
    pub total_sellers: usize,
    /// Seconds, three decimals.
    pub time_taken: f64,
    pub trade_type: &'a str,
    pub api_owner: &'a str,
    pub api_updates: &'a str,
    pub statistics: &'a P2pStatistics,
    pub parameters: P2pParameters<'a>,
    pub timestamp: String,
    pub cache_status: &'static str,
}
