/// Which counter an update applies to.
pub mod stats_event;
