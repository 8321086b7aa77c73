//! # P2P Aggregator
//!
//! An HTTP service that aggregates peer-to-peer crypto market advertisements from a
//! paginated upstream listing API, built on actix-web and tokio.
//!
//! ## Overview
//!
//! A `/p2p` request is validated against a static vocabulary of assets, fiat currencies
//! and payment methods, then answered from a short-lived in-process cache or by fetching
//! every needed upstream page concurrently. The merged listings are reshaped, filtered,
//! sorted, truncated and summarized before being returned as JSON.
//!
//! ## Features
//!
//! - **Concurrent fan-out**: Bounded by a shared semaphore, a per-page timeout and an overall deadline
//! - **Partial results**: Failed pages are logged and skipped, never failing the request
//! - **Response cache**: Fixed-TTL cache keyed by the upstream-affecting parameters
//! - **SSL/TLS**: Optional rustls termination per HTTP server
//! - **Monitoring**: Atomic counters, a health endpoint and Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use p2p_aggregator::config::structs::configuration::Configuration;
//! use p2p_aggregator::p2p::structs::p2p_aggregator::P2pAggregator;
//!
//! let config = Arc::new(Configuration::load_from_file(false, "config.toml")?);
//! let aggregator = Arc::new(P2pAggregator::from_config(config)?);
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Fixed-TTL response cache
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP/HTTPS endpoints
//! - [`p2p`] - Query validation, fan-out and the filter/sort engine
//! - [`stats`] - Request and upstream counters
//! - [`structs`] - CLI argument parsing
//! - [`upstream`] - Upstream listing client

/// Response cache module.
///
/// Stores merged upstream listing sets for a fixed TTL so identical upstream queries
/// inside the window are not repeated.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Contains logging setup, rounding and timestamp helpers and the generic error type.
pub mod common;

/// Configuration management module.
///
/// Loads, validates and optionally creates the TOML configuration, and applies
/// environment overrides.
pub mod config;

/// HTTP/HTTPS server module.
///
/// Routes, handlers and response envelopes of the public API.
pub mod http;

/// P2P aggregation module.
///
/// Query validation, the concurrent page fetcher and the filter/sort engine.
pub mod p2p;

/// Statistics tracking module.
pub mod stats;

/// CLI argument structures.
pub mod structs;

/// Upstream listing client module.
///
/// The `ListingSource` seam and its reqwest-backed implementation.
pub mod upstream;
