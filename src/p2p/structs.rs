//! Data structures of the P2P aggregator.

/// Cache key derived from the upstream-affecting parameters.
pub mod query_key;

/// One advertisement reshaped for the response.
pub mod listing_record;

/// Optional threshold filters.
pub mod p2p_filters;

/// Summary statistics over returned listings.
pub mod p2p_statistics;

/// Raw query string parameters of `/p2p`.
pub mod p2p_query_params;

/// Normalized and validated `/p2p` query.
pub mod p2p_query;

/// Filtered, sorted and truncated listings with statistics.
pub mod p2p_listing_page;

/// Fan-out scheduler, cache and statistics hub.
pub mod p2p_aggregator;
