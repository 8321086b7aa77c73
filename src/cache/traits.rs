/// Interface every cache engine implements.
pub mod cache_backend;
