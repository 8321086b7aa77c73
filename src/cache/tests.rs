#[cfg(test)]
mod cache_tests {
    mod cache_engine_tests {
        use crate::cache::enums::cache_engine::CacheEngine;

        #[test]
        fn test_cache_engine_display() {
            assert_eq!(format!("{}", CacheEngine::memory), "memory");
            assert_eq!(format!("{}", CacheEngine::disabled), "disabled");
        }

        #[test]
        fn test_cache_engine_serialization() {
            assert_eq!(serde_json::to_string(&CacheEngine::memory).unwrap(), "\"memory\"");
            let engine: CacheEngine = serde_json::from_str("\"disabled\"").unwrap();
            assert_eq!(engine, CacheEngine::disabled);
        }

        #[test]
        fn test_cache_engine_default_is_memory() {
            assert_eq!(CacheEngine::default(), CacheEngine::memory);
        }

        #[test]
        fn test_disabled_engine_never_stores() {
            use std::sync::Arc;
            use crate::p2p::structs::query_key::QueryKey;

            let cache = CacheEngine::disabled.build(30);
            let key = QueryKey::new("USDT", "BDT", "SELL", "ALL", 100);
            cache.put(key.clone(), Arc::new(vec![serde_json::json!({"adv": {}})]));
            assert!(cache.get(&key).is_none());
            assert!(cache.is_empty());
        }
    }

    mod memory_cache_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use serde_json::json;
        use crate::cache::structs::memory_cache::MemoryCache;
        use crate::cache::traits::cache_backend::CacheBackend;
        use crate::p2p::structs::query_key::QueryKey;

        fn key(limit: usize) -> QueryKey {
            QueryKey::new("USDT", "BDT", "SELL", "ALL", limit)
        }

        #[test]
        fn test_hit_returns_same_listing_set() {
            let cache = MemoryCache::new(Duration::from_secs(30));
            let listings = Arc::new(vec![json!({"adv": {"price": "1"}})]);
            cache.put(key(100), listings.clone());
            let hit = cache.get(&key(100)).expect("live entry");
            assert!(Arc::ptr_eq(&hit, &listings));
        }

        #[test]
        fn test_different_limit_is_different_key() {
            let cache = MemoryCache::new(Duration::from_secs(30));
            cache.put(key(100), Arc::new(vec![json!({})]));
            assert!(cache.get(&key(50)).is_none());
        }

        #[test]
        fn test_entry_expires_after_ttl() {
            let cache = MemoryCache::new(Duration::from_millis(50));
            cache.put(key(100), Arc::new(vec![json!({})]));
            assert!(cache.get(&key(100)).is_some());
            std::thread::sleep(Duration::from_millis(80));
            assert!(cache.get(&key(100)).is_none());
            assert_eq!(cache.len(), 0);
        }

        #[test]
        fn test_miss_evicts_all_expired_entries() {
            let cache = MemoryCache::new(Duration::from_millis(50));
            cache.put(key(1), Arc::new(vec![json!({})]));
            cache.put(key(2), Arc::new(vec![json!({})]));
            std::thread::sleep(Duration::from_millis(80));
            cache.put(key(3), Arc::new(vec![json!({})]));
            assert_eq!(cache.len(), 3);
            assert!(cache.get(&key(4)).is_none());
            assert_eq!(cache.len(), 1);
            assert!(cache.get(&key(3)).is_some());
        }

        #[test]
        fn test_put_replaces_existing_entry() {
            let cache = MemoryCache::new(Duration::from_secs(30));
            cache.put(key(100), Arc::new(vec![json!({"n": 1})]));
            cache.put(key(100), Arc::new(vec![json!({"n": 2}), json!({"n": 3})]));
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.get(&key(100)).unwrap().len(), 2);
        }

        #[test]
        fn test_evict_expired_reports_count() {
            let cache = MemoryCache::new(Duration::from_millis(20));
            cache.put(key(1), Arc::new(vec![]));
            cache.put(key(2), Arc::new(vec![]));
            std::thread::sleep(Duration::from_millis(40));
            assert_eq!(cache.evict_expired(), 2);
            assert!(cache.is_empty());
        }
    }
}
