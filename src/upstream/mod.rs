//! Upstream listing client.
//!
//! Issues single page requests against the paginated P2P advertisement search
//! endpoint. The [`ListingSource`](traits::listing_source::ListingSource) trait is the
//! seam between the fan-out scheduler and the network, so the scheduler can be driven
//! by the real HTTP client or by a scripted source in tests.
//!
//! A page request either yields the raw `data` array of the upstream response or an
//! [`UpstreamError`](errors::UpstreamError). Callers decide how to recover; the
//! aggregator treats every error as an empty page.

/// Error types for page requests.
pub mod errors;

/// Implementation blocks for the upstream client.
pub mod impls;

/// Data structures for page requests and the HTTP client.
pub mod structs;

/// The listing source trait.
pub mod traits;

#[cfg(test)]
mod tests;
