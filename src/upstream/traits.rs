/// Source of raw listing pages.
pub mod listing_source;
