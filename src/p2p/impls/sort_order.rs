use crate::p2p::enums::sort_order::SortOrder;

impl SortOrder {
    /// `desc` sorts descending, anything else ascending.
    pub fn parse(value: &str) -> SortOrder {
        if value == "desc" { SortOrder::Descending } else { SortOrder::Ascending }
    }
}
