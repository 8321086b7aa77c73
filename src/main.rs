use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use p2p_aggregator::common::common::{http_check_host_and_port_used, install_crypto_provider, setup_logging};
use p2p_aggregator::config::structs::configuration::Configuration;
use p2p_aggregator::http::http::http_service;
use p2p_aggregator::http::structs::http_service_data::HttpServiceData;
use p2p_aggregator::p2p::structs::p2p_aggregator::P2pAggregator;
use p2p_aggregator::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config, &args.config) {
        Ok(config) => Arc::new(config),
        Err(error) => {
            eprintln!("[ERROR] Unable to start with {}: {error}", args.config);
            exit(101)
        }
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    install_crypto_provider();

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let aggregator = match P2pAggregator::from_config(config.clone()) {
                Ok(aggregator) => Arc::new(aggregator),
                Err(error) => {
                    error!("[BOOT] Unable to create the upstream client: {error}");
                    exit(1);
                }
            };

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown handler");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut http_futures = Vec::new();
            let mut https_futures = Vec::new();

            for http_server_object in &config.http_server {
                if http_server_object.enabled {
                    http_check_host_and_port_used(http_server_object.bind_address.clone());
                    let address: SocketAddr = match http_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(_) => {
                            error!("[BOOT] Invalid bind_address: {}", http_server_object.bind_address);
                            exit(1);
                        }
                    };

                    let data = Arc::new(HttpServiceData {
                        aggregator: aggregator.clone(),
                        http_server_config: Arc::new(http_server_object.clone()),
                    });
                    let (handle, future) = match http_service(address, data).await {
                        Ok(server) => server,
                        Err(error) => {
                            error!("[BOOT] Unable to start the HTTP server on {address}: {error}");
                            exit(1);
                        }
                    };

                    if http_server_object.ssl {
                        https_futures.push((handle, future));
                    } else {
                        http_futures.push((handle, future));
                    }
                }
            }

            let mut server_handles = Vec::new();
            for futures in [http_futures, https_futures] {
                if !futures.is_empty() {
                    let (handles, futures): (Vec<_>, Vec<_>) = futures.into_iter().unzip();
                    server_handles.extend(handles);
                    tokio::spawn(async move {
                        if let Err(error) = try_join_all(futures).await {
                            error!("[HTTP] Server stopped with an error: {error}");
                        }
                    });
                }
            }

            let stats_handler = tokio_shutdown.clone();
            let aggregator_spawn_stats = aggregator.clone();
            let console_interval = aggregator_spawn_stats.config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let evicted = aggregator_spawn_stats.cache.evict_expired();
                            let stats = aggregator_spawn_stats.get_stats();
                            info!(
                                "[STATS] Requests: {} - Rejected: {} - Errors: {} | Cache: Hits:{} Misses:{} Entries:{} Evicted:{} | Pages: OK:{} Failed:{}",
                                stats.requests_handled, stats.validation_failures, stats.internal_errors,
                                stats.cache_hits, stats.cache_misses, aggregator_spawn_stats.cache.len(), evicted,
                                stats.pages_fetched, stats.page_failures
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            if tokio::signal::ctrl_c().await.is_err() {
                error!("[BOOT] Unable to listen for the shutdown signal");
            }
            info!("Shutdown request received, shutting down...");

            for handle in &server_handles {
                handle.stop(true).await;
            }

            tokio_shutdown.handle().await;
            tokio::time::sleep(Duration::from_secs(1)).await;

            info!("Server shutting down completed");
            Ok(())
        })
}
