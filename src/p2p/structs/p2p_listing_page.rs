use crate::p2p::structs::listing_record::ListingRecord;
use crate::p2p::structs::p2p_statistics::P2pStatistics;

#[derive(Debug, Clone, PartialEq)]
pub struct P2pListingPage {
    pub records: Vec<ListingRecord>,
    /// Listings that passed the filters, before truncation to the limit.
    pub total_found: usize,
    pub statistics: P2pStatistics,
}
