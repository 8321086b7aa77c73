use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::upstream_config::UpstreamConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            api_owner: String::from("@ISmartCoder"),
            api_updates: String::from("t.me/TheSmartDev"),
            http_server: vec!(
                HttpServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8000"),
                    keep_alive: 60,
                    request_timeout: 60,
                    disconnect_timeout: 15,
                    threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(4),
                    ssl: false,
                    ssl_key: String::from(""),
                    ssl_cert: String::from(""),
                }
            ),
            upstream: UpstreamConfig::default(),
            cache: CacheConfig::default(),
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool, path: &str) -> Result<Configuration, CustomError> {
        let mut config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => {
                        eprintln!("{e}");
                        return Err(CustomError::new("could not serialize the default configuration"));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} in the root folder, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        config.apply_overrides(std::env::var("LOG_LEVEL").ok(), std::env::var("PORT").ok())?;

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    /// Applies `LOG_LEVEL` and `PORT` style overrides. The port replaces the port of every
    /// enabled HTTP server.
    pub fn apply_overrides(&mut self, log_level: Option<String>, port: Option<String>) -> Result<(), CustomError> {
        if let Some(level) = log_level {
            self.log_level = level.to_lowercase();
        }
        if let Some(port) = port {
            let port: u16 = port.trim().parse().map_err(|_| CustomError::new(&format!("invalid PORT override: '{port}'")))?;
            for server in self.http_server.iter_mut().filter(|server| server.enabled) {
                let mut address: SocketAddr = server.bind_address.parse()
                    .map_err(|_| CustomError::new(&format!("invalid bind_address: '{}'", server.bind_address)))?;
                address.set_port(port);
                server.bind_address = address.to_string();
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(CustomError::new(&format!("[VALIDATE CONFIG] Unknown log level: '{}'", self.log_level)));
        }

        for server in self.http_server.iter().filter(|server| server.enabled) {
            if server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] Invalid bind_address: '{}'", server.bind_address)));
            }
            if server.ssl && (server.ssl_key.is_empty() || server.ssl_cert.is_empty()) {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] SSL enabled on {} without ssl_key or ssl_cert", server.bind_address)));
            }
        }

        let upstream = &self.upstream;
        let check_map = [
            ("upstream.page_size", upstream.page_size as u64),
            ("upstream.page_cap", upstream.page_cap as u64),
            ("upstream.page_timeout", upstream.page_timeout),
            ("upstream.total_timeout", upstream.total_timeout),
            ("upstream.max_connections", upstream.max_connections as u64),
            ("upstream.max_connections_per_host", upstream.max_connections_per_host as u64),
        ];
        for (name, value) in check_map {
            if value == 0 {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] {name} must be greater than 0")));
            }
        }

        if self.cache.engine == CacheEngine::memory && self.cache.ttl == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] cache.ttl must be greater than 0 for the memory engine"));
        }

        Ok(())
    }
}
