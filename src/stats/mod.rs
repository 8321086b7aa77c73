//! Request and upstream counters.
//!
//! Counters are plain atomics on [`StatsAtomics`](structs::stats_atomics::StatsAtomics),
//! shared by every HTTP worker through the aggregator. A [`Stats`](structs::stats::Stats)
//! snapshot is what the health endpoint and the console logger read.
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_aggregator::stats::enums::stats_event::StatsEvent;
//!
//! aggregator.update_stats(StatsEvent::RequestsHandled, 1);
//! let snapshot = aggregator.get_stats();
//! ```

/// Counter selectors.
pub mod enums;

/// Counter storage and snapshots.
pub mod structs;

/// Counter access on the aggregator.
pub mod impls;

#[cfg(test)]
mod tests;
