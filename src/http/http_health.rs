use std::sync::Arc;
use actix_web::HttpResponse;
use actix_web::web::Data;
use crate::common::common::format_uptime;
use crate::http::http::{http_service_json, HTTP_ENDPOINTS};
use crate::http::structs::health_response::HealthResponse;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;

pub async fn http_service_health(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let aggregator = &data.aggregator;
    aggregator.update_stats(StatsEvent::RequestsHandled, 1);
    aggregator.cache.evict_expired();

    http_service_json(&data, &HealthResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "Operational",
        uptime: format_uptime(aggregator.uptime_seconds()),
        total_endpoints: HTTP_ENDPOINTS.len(),
        cache_entries: aggregator.cache.len(),
        stats: aggregator.get_stats(),
        last_checked: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        api_owner: &aggregator.config.api_owner,
        api_updates: &aggregator.config.api_updates,
    })
}
