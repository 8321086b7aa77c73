use crate::p2p::structs::listing_record::ListingRecord;
use crate::p2p::structs::p2p_filters::P2pFilters;

impl P2pFilters {
    /// Zero thresholds count as not supplied.
    pub fn new(min_completion_rate: Option<f64>, min_orders: Option<u64>, online_only: bool) -> P2pFilters {
        P2pFilters {
            min_completion_rate: min_completion_rate.filter(|rate| *rate != 0.0),
            min_orders: min_orders.filter(|orders| *orders != 0),
            online_only,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_completion_rate.is_none() && self.min_orders.is_none() && !self.online_only
    }

    pub fn matches(&self, record: &ListingRecord) -> bool {
        if let Some(min_rate) = self.min_completion_rate {
            if record.completion_rate < min_rate {
                return false;
            }
        }
        if let Some(min_orders) = self.min_orders {
            if record.monthly_orders < min_orders {
                return false;
            }
        }
        // "online" is the merchant tier, not live presence.
        if self.online_only && !record.is_merchant() {
            return false;
        }
        true
    }
}
