use std::sync::Arc;
use serde_json::Value;

/// Merged raw upstream listings, shared between the cache and in-flight requests.
pub type CachedListings = Arc<Vec<Value>>;
