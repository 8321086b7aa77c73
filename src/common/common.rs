use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter>
{
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

/// Rounds the exact binary value to the given number of decimals, ties to even.
/// `round_to(2.675, 2)` is 2.67 because 2.675 is stored slightly below the tie.
pub fn round_to(value: f64, decimals: usize) -> f64
{
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Local wall-clock time in ISO-8601 with microseconds and no offset.
pub fn iso_timestamp() -> String
{
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

pub fn format_uptime(seconds: i64) -> String
{
    let seconds = seconds.max(0);
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{days}d {hours}h {minutes}m {secs}s")
}

pub fn http_check_host_and_port_used(bind_address: String) {
    if cfg!(target_os = "windows") {
        match std::net::TcpListener::bind(&bind_address) {
            Ok(e) => e,
            Err(_) => {
                panic!("Unable to bind to {} ! Exiting...", &bind_address);
            }
        };
    }
}

/// Installs ring as the process-wide rustls provider. Later calls are no-ops.
pub fn install_crypto_provider()
{
    let _ = rustls::crypto::ring::default_provider().install_default();
}
