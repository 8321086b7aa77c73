mod common;

use std::fs;
use p2p_aggregator::cache::enums::cache_engine::CacheEngine;
use p2p_aggregator::config::structs::configuration::Configuration;

#[test]
fn test_config_toml_loading() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "debug"
log_console_interval = 30
api_owner = "@owner"
api_updates = "t.me/updates"

[[http_server]]
enabled = true
bind_address = "127.0.0.1:9000"
keep_alive = 60
request_timeout = 30
disconnect_timeout = 5
threads = 2
ssl = false
ssl_key = ""
ssl_cert = ""

[upstream]
url = "https://upstream.invalid/search"
user_agent = "test-agent"
page_size = 10
page_cap = 5
page_timeout = 3
total_timeout = 9
max_connections = 4
max_connections_per_host = 2

[cache]
engine = "disabled"
ttl = 0

[sentry_config]
enabled = false
dsn = ""
debug = false
sample_rate = 1.0
max_breadcrumbs = 100
attach_stacktrace = true
send_default_pii = false
traces_sample_rate = 1.0
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.api_owner, "@owner");
    assert_eq!(config.upstream.page_size, 10);
    assert_eq!(config.upstream.max_connections_per_host, 2);
    assert_eq!(config.cache.engine, CacheEngine::disabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_save_and_reload() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    let data = toml::to_string(&Configuration::init()).unwrap();
    Configuration::save_file(path, data).unwrap();

    let config = Configuration::load_file(path).unwrap();
    assert_eq!(config.upstream.page_cap, 50);
    assert_eq!(config.cache.ttl, 30);
}

#[test]
fn test_load_from_file_creates_defaults_when_asked() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    assert!(Configuration::load_from_file(false, path).is_err());
    assert!(!config_path.exists());

    assert!(Configuration::load_from_file(true, path).is_err());
    assert!(config_path.exists());
    assert!(Configuration::load_file(path).is_ok());
}

#[test]
fn test_corrupt_config_is_rejected() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = [").unwrap();
    assert!(Configuration::load_file(config_path.to_str().unwrap()).is_err());
}

#[test]
fn test_load_from_file_reports_invalid_value() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    let mut config = Configuration::init();
    config.upstream.page_size = 0;
    Configuration::save_file(path, toml::to_string(&config).unwrap()).unwrap();

    let error = Configuration::load_from_file(false, path).unwrap_err();
    assert!(error.to_string().contains("upstream.page_size"));
}
