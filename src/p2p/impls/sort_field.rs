use std::cmp::Ordering;
use crate::p2p::enums::sort_field::SortField;
use crate::p2p::enums::sort_order::SortOrder;
use crate::p2p::structs::listing_record::ListingRecord;

impl SortField {
    /// Parses an already lowercased key. Unknown keys yield `None`, meaning "keep upstream order".
    pub fn parse(value: &str) -> Option<SortField> {
        match value {
            "price" => Some(SortField::Price),
            "completion_rate" => Some(SortField::CompletionRate),
            "available_amount" => Some(SortField::AvailableAmount),
            "monthly_orders" => Some(SortField::MonthlyOrders),
            _ => None
        }
    }

    pub fn compare(&self, a: &ListingRecord, b: &ListingRecord) -> Ordering {
        match self {
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::CompletionRate => a.completion_rate.total_cmp(&b.completion_rate),
            SortField::AvailableAmount => a.available_amount.total_cmp(&b.available_amount),
            SortField::MonthlyOrders => a.monthly_orders.cmp(&b.monthly_orders),
        }
    }

    /// Stable in both directions: equal keys keep their relative order.
    pub fn sort(&self, records: &mut [ListingRecord], order: SortOrder) {
        match order {
            SortOrder::Ascending => records.sort_by(|a, b| self.compare(a, b)),
            SortOrder::Descending => records.sort_by(|a, b| self.compare(b, a)),
        }
    }
}
