//! P2P listing aggregation.
//!
//! Turns one `/p2p` query into a ranked set of seller advertisements:
//!
//! 1. [`P2pQuery::from_params`](structs::p2p_query::P2pQuery) normalizes and validates the
//!    raw query string against the static [`vocabulary`]. Nothing reaches the upstream
//!    before validation succeeds.
//! 2. [`P2pAggregator::listings`](structs::p2p_aggregator::P2pAggregator) serves the merged
//!    upstream set from the cache, or fans out one request per page, bounded by a shared
//!    semaphore, a per-page timeout and an overall deadline.
//! 3. [`P2pListingPage::build`](structs::p2p_listing_page::P2pListingPage) reshapes,
//!    filters, sorts and truncates the listings and computes price statistics over what
//!    is returned.
//!
//! Failed pages never fail the query. They are logged, counted and contribute nothing;
//! if every page fails the search reports that no sellers were found.
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_aggregator::p2p::structs::p2p_query::P2pQuery;
//! use p2p_aggregator::p2p::structs::p2p_query_params::P2pQueryParams;
//!
//! let query = P2pQuery::from_params(P2pQueryParams::default())?;
//! match aggregator.search(&query).await {
//!     P2pSearchResult::Found(page) => println!("{} sellers", page.records.len()),
//!     P2pSearchResult::NoSellers => println!("nothing listed"),
//! }
//! ```

/// Trade direction, sort keys and search outcome.
pub mod enums;

/// Validation and internal errors.
pub mod errors;

/// Implementation blocks for the aggregation pipeline.
pub mod impls;

/// Data structures for queries, listings and the aggregator.
pub mod structs;

/// Supported assets, fiat currencies and payment methods.
pub mod vocabulary;
