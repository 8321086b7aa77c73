use serde_json::Value;
use crate::p2p::structs::listing_record::ListingRecord;
use crate::p2p::structs::p2p_listing_page::P2pListingPage;
use crate::p2p::structs::p2p_query::P2pQuery;
use crate::p2p::structs::p2p_statistics::P2pStatistics;

impl P2pListingPage {
    /// Transform, filter, sort, truncate, then compute statistics over what is returned.
    pub fn build(raw: &[Value], query: &P2pQuery) -> P2pListingPage {
        let mut records: Vec<ListingRecord> = raw.iter()
            .filter_map(ListingRecord::from_upstream)
            .filter(|record| query.filters.matches(record))
            .collect();

        if let Some(field) = query.sort_field {
            field.sort(&mut records, query.sort_order);
        }

        let total_found = records.len();
        records.truncate(query.limit);
        let statistics = P2pStatistics::from_records(&records);

        P2pListingPage {
            records,
            total_found,
            statistics,
        }
    }
}
