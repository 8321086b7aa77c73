use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::middleware::Compress;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info};
use serde::Serialize;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::http_health::http_service_health;
use crate::http::http_p2p::{http_service_p2p, http_service_p2p_currencies, http_service_p2p_methods};
use crate::http::structs::error_response::ErrorResponse;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::p2p::errors::P2pError;
use crate::stats::enums::stats_event::StatsEvent;

/// Routed paths, in registration order.
pub const HTTP_ENDPOINTS: [&str; 4] = ["/p2p", "/p2p/methods", "/p2p/currencies", "/api/health"];

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        cfg.service(web::resource("/p2p").route(web::get().to(http_service_p2p)));
        cfg.service(web::resource("/p2p/methods").route(web::get().to(http_service_p2p_methods)));
        cfg.service(web::resource("/p2p/currencies").route(web::get().to(http_service_p2p_currencies)));
        cfg.service(web::resource("/api/health").route(web::get().to(http_service_health)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>,
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let config = data.http_server_config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads.max(1) as usize);

    let server = if config.ssl {
        info!("[HTTP] Starting server listener with SSL on {addr}");
        server.bind_rustls_0_23((addr.ip(), addr.port()), http_service_tls_config(&config)?)?
    } else {
        info!("[HTTP] Starting server listener on {addr}");
        server.bind((addr.ip(), addr.port()))?
    };

    let server = server.disable_signals().run();
    Ok((server.handle(), server))
}

/// Loads the PEM certificate chain and private key named by the server section.
pub fn http_service_tls_config(config: &HttpServerConfig) -> std::io::Result<rustls::ServerConfig>
{
    if config.ssl_key.is_empty() || config.ssl_cert.is_empty() {
        error!("[HTTP] No SSL key or SSL certificate given");
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, "missing ssl_key or ssl_cert"));
    }

    let key_file = &mut BufReader::new(File::open(&config.ssl_key)?);
    let certs_file = &mut BufReader::new(File::open(&config.ssl_cert)?);

    let tls_certs = rustls_pemfile::certs(certs_file).collect::<Result<Vec<_>, _>>()?;
    let tls_key = match rustls_pemfile::private_key(key_file)? {
        Some(key) => key,
        None => {
            error!("[HTTP] No private key found in {}", config.ssl_key);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "no private key in ssl_key"));
        }
    };

    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(std::io::Error::other)
}

/// Serializes `body` as a 200 JSON response, or answers 500 if that fails.
pub fn http_service_json<T: Serialize>(data: &HttpServiceData, body: &T) -> HttpResponse
{
    match serde_json::to_string(body) {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::json()).body(body),
        Err(error) => http_service_internal_error(data, &P2pError::Internal(format!("failed to serialize response: {error}"))),
    }
}

pub fn http_service_error_response(status: actix_web::http::StatusCode, message: impl Into<String>, config: &Configuration) -> HttpResponse
{
    HttpResponse::build(status).content_type(ContentType::json()).json(ErrorResponse::new(message, config))
}

/// Logs and reports `error`; the client only sees a generic message.
pub fn http_service_internal_error(data: &HttpServiceData, error: &P2pError) -> HttpResponse
{
    error!("[HTTP] {error}");
    sentry::capture_error(error);
    data.aggregator.update_stats(StatsEvent::InternalErrors, 1);
    http_service_error_response(
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        &data.aggregator.config,
    )
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    debug!("[HTTP] {} {}: 404 Not Found", request.method(), request.path());
    http_service_error_response(actix_web::http::StatusCode::NOT_FOUND, "Not found", &data.aggregator.config)
}
