pub mod listing_record;
pub mod p2p_aggregator;
pub mod p2p_aggregator_fetcher;
pub mod p2p_filters;
pub mod p2p_listing_page;
pub mod p2p_query;
pub mod p2p_query_params;
pub mod p2p_statistics;
pub mod query_key;
pub mod sort_field;
pub mod sort_order;
pub mod trade_type;
