use crate::common::common::round_to;
use crate::p2p::structs::listing_record::ListingRecord;
use crate::p2p::structs::p2p_statistics::P2pStatistics;

impl P2pStatistics {
    pub fn from_records(records: &[ListingRecord]) -> P2pStatistics {
        if records.is_empty() {
            return P2pStatistics::default();
        }

        let total_price: f64 = records.iter().map(|record| record.price).sum();
        P2pStatistics {
            avg_price: round_to(total_price / records.len() as f64, 2),
            min_price: records.iter().map(|record| record.price).fold(f64::INFINITY, f64::min),
            max_price: records.iter().map(|record| record.price).fold(f64::NEG_INFINITY, f64::max),
            total_available: records.iter().map(|record| record.available_amount).sum(),
        }
    }
}
