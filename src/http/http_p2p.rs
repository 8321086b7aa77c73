use std::sync::Arc;
use std::time::Instant;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::StatusCode;
use actix_web::web::Data;
use log::{info, warn};
use serde_json::json;
use crate::common::common::{iso_timestamp, round_to};
use crate::http::http::{http_service_error_response, http_service_json};
use crate::http::structs::http_service_data::HttpServiceData;
use crate::http::structs::p2p_empty_response::P2pEmptyResponse;
use crate::http::structs::p2p_found_response::P2pFoundResponse;
use crate::http::structs::p2p_parameters::P2pParameters;
use crate::p2p::enums::p2p_search_result::P2pSearchResult;
use crate::p2p::errors::ValidationError;
use crate::p2p::structs::p2p_query::P2pQuery;
use crate::p2p::structs::p2p_query_params::P2pQueryParams;
use crate::p2p::vocabulary::{fiat_currencies, payment_methods_json, CRYPTO_ASSETS, PAYMENT_METHODS, TRADE_TYPES};
use crate::stats::enums::stats_event::StatsEvent;

const CACHE_STATUS: &str = "served";

#[tracing::instrument(level = "debug", skip_all, fields(query = request.query_string()))]
pub async fn http_service_p2p(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let start = Instant::now();
    let aggregator = &data.aggregator;
    let config = &aggregator.config;
    aggregator.update_stats(StatsEvent::RequestsHandled, 1);

    let query = match web::Query::<P2pQueryParams>::from_query(request.query_string())
        .map_err(|error| ValidationError::InvalidParameter(error.to_string()))
        .and_then(|params| P2pQuery::from_params(params.into_inner()))
    {
        Ok(query) => query,
        Err(error) => {
            warn!("[HTTP] Rejected /p2p request: {error}");
            aggregator.update_stats(StatsEvent::ValidationFailures, 1);
            return http_service_error_response(StatusCode::BAD_REQUEST, error.to_string(), config);
        }
    };

    match aggregator.search(&query).await {
        P2pSearchResult::NoSellers => {
            info!("[P2P] No sellers found for {}", query.cache_key());
            http_service_json(&data, &P2pEmptyResponse {
                success: false,
                message: "No sellers found",
                data: &[],
                count: 0,
                total_sellers: 0,
                time_taken: round_to(start.elapsed().as_secs_f64(), 3),
                trade_type: query.trade_type.as_str(),
                api_owner: &config.api_owner,
                api_updates: &config.api_updates,
                parameters: P2pParameters::brief(&query),
                timestamp: iso_timestamp(),
                cache_status: CACHE_STATUS,
            })
        }
        P2pSearchResult::Found(page) => {
            http_service_json(&data, &P2pFoundResponse {
                success: true,
                data: &page.records,
                count: page.records.len(),
                total_found: page.total_found,
                total_sellers: page.total_found,
                time_taken: round_to(start.elapsed().as_secs_f64(), 3),
                trade_type: query.trade_type.as_str(),
                api_owner: &config.api_owner,
                api_updates: &config.api_updates,
                statistics: &page.statistics,
                parameters: P2pParameters::full(&query),
                timestamp: iso_timestamp(),
                cache_status: CACHE_STATUS,
            })
        }
    }
}

pub async fn http_service_p2p_methods(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let config = &data.aggregator.config;
    data.aggregator.update_stats(StatsEvent::RequestsHandled, 1);
    http_service_json(&data, &json!({
        "success": true,
        "data": payment_methods_json(),
        "timestamp": iso_timestamp(),
        "api_owner": config.api_owner,
        "api_updates": config.api_updates
    }))
}

pub async fn http_service_p2p_currencies(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let config = &data.aggregator.config;
    data.aggregator.update_stats(StatsEvent::RequestsHandled, 1);
    http_service_json(&data, &json!({
        "success": true,
        "data": {
            "crypto_assets": CRYPTO_ASSETS,
            "fiat_currencies": fiat_currencies(),
            "trade_types": TRADE_TYPES
        },
        "total_currencies": PAYMENT_METHODS.len(),
        "total_assets": CRYPTO_ASSETS.len(),
        "timestamp": iso_timestamp(),
        "api_owner": config.api_owner,
        "api_updates": config.api_updates
    }))
}
