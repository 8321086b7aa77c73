//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the service configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **log_level / log_console_interval**: Logging verbosity and statistics output interval
//! - **api_owner / api_updates**: Attribution fields added to every JSON response
//! - **http_server**: HTTP/HTTPS server instances
//! - **upstream**: P2P listing endpoint, paging and timeout settings
//! - **cache**: Response cache engine and TTL
//! - **sentry_config**: Error reporting configuration
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Environment variable overrides (`LOG_LEVEL`, `PORT`)
//! - Multiple server instance configurations
//! - Default value generation
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_aggregator::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false, "config.toml")?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
