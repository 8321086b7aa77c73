/// Point-in-time copy of the counters.
pub mod stats;

/// Live counters.
pub mod stats_atomics;
