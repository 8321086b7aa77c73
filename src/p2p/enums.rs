/// Trade direction from the caller's perspective.
pub mod trade_type;

/// Sortable listing fields.
pub mod sort_field;

/// Sort direction.
pub mod sort_order;

/// Outcome of a listing search.
pub mod p2p_search_result;
