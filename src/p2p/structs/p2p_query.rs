use crate::p2p::enums::sort_field::SortField;
use crate::p2p::enums::sort_order::SortOrder;
use crate::p2p::enums::trade_type::TradeType;
use crate::p2p::structs::p2p_filters::P2pFilters;

/// A validated query. Codes are uppercase, `sort_by` and `order` lowercase as echoed back.
#[derive(Debug, Clone, PartialEq)]
pub struct P2pQuery {
    pub asset: String,
    pub pay_type: String,
    pub pay_method: String,
    /// Upstream display name of `pay_method`; `None` for `ALL`.
    pub pay_method_name: Option<&'static str>,
    pub trade_type: TradeType,
    pub limit: usize,
    pub sort_by: String,
    pub sort_field: Option<SortField>,
    pub order: String,
    pub sort_order: SortOrder,
    pub filters: P2pFilters,
}
