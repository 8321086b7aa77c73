#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::cache::enums::cache_engine::CacheEngine;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.upstream.page_size, 20);
            assert_eq!(config.upstream.page_cap, 50);
            assert_eq!(config.upstream.page_timeout, 15);
            assert_eq!(config.upstream.total_timeout, 45);
            assert_eq!(config.cache.engine, CacheEngine::memory);
            assert_eq!(config.cache.ttl, 30);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_toml_roundtrip_keeps_sections() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            assert!(serialized.contains("[upstream]"));
            assert!(serialized.contains("[cache]"));
            assert!(serialized.contains("[[http_server]]"));
            let parsed = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(parsed.upstream.url, config.upstream.url);
            assert_eq!(parsed.http_server.len(), 1);
        }

        #[test]
        fn test_load_rejects_missing_sections() {
            assert!(Configuration::load(b"log_level = \"info\"").is_err());
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = "chatty".to_string();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_zero_page_size() {
            let mut config = Configuration::init();
            config.upstream.page_size = 0;
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("upstream.page_size"));
        }

        #[test]
        fn test_validate_rejects_zero_ttl_for_memory_cache() {
            let mut config = Configuration::init();
            config.cache.ttl = 0;
            assert!(config.validate().is_err());
            config.cache.engine = CacheEngine::disabled;
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_rejects_bad_bind_address() {
            let mut config = Configuration::init();
            config.http_server[0].bind_address = "localhost".to_string();
            assert!(config.validate().is_err());
            config.http_server[0].enabled = false;
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_apply_overrides() {
            let mut config = Configuration::init();
            config.apply_overrides(Some("DEBUG".to_string()), Some("9090".to_string())).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.http_server[0].bind_address, "0.0.0.0:9090");
        }

        #[test]
        fn test_apply_overrides_rejects_bad_port() {
            let mut config = Configuration::init();
            assert!(config.apply_overrides(None, Some("eighty".to_string())).is_err());
            assert_eq!(config.http_server[0].bind_address, "0.0.0.0:8000");
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_load_file_missing_is_io_error() {
            let result = Configuration::load_file("/nonexistent/path/config.toml");
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }
    }
}
