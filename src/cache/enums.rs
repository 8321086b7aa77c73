/// Selectable cache engine.
pub mod cache_engine;
