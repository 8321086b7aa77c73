//! HTTP/HTTPS front end.
//!
//! One or more actix-web servers, each configured by an `[[http_server]]` section,
//! optionally terminating TLS with rustls.
//!
//! # Endpoints
//!
//! - `/p2p` - Aggregated, filtered and sorted seller listings
//! - `/p2p/methods` - Payment methods per fiat currency
//! - `/p2p/currencies` - Supported assets, fiat currencies and trade directions
//! - `/api/health` - Uptime, counters and cache size
//!
//! Every other path answers 404 with a JSON error body.
//!
//! # Response Format
//!
//! All bodies are JSON and carry the configured `api_owner` and `api_updates`
//! attribution. Validation failures answer 400 with `{error, api_owner, api_updates}`
//! before anything is fetched. Unexpected failures answer 500 with a generic message;
//! the detail goes to the log and, when enabled, to Sentry.

/// Response envelopes and shared handler state.
pub mod structs;

/// Implementation blocks for the response envelopes.
pub mod impls;

/// Server bootstrap, routing and shared responses.
#[allow(clippy::module_inception)]
pub mod http;

/// `/p2p` handlers.
pub mod http_p2p;

/// `/api/health` handler.
pub mod http_health;
