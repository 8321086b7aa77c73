//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the aggregator.
//!
//! # Utilities
//!
//! - Logging setup
//! - Rounding helpers matching the JSON output precision
//! - Timestamp and uptime formatting
//! - Bind address checks
//!
//! # Data Structures
//!
//! - `CustomError` - Generic error with a message, used during boot

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
