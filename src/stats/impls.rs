/// `get_stats` and `update_stats` on the aggregator.
pub mod p2p_aggregator;

pub mod stats_atomics;
