//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP/HTTPS server configuration.
pub mod http_server_config;

/// Upstream listing endpoint configuration (paging, timeouts, connection limits).
pub mod upstream_config;

/// Response cache configuration.
pub mod cache_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
