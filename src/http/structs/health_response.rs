use serde::Serialize;
use crate::stats::structs::stats::Stats;

#[derive(Serialize, Debug)]
pub struct HealthResponse<'a> {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub uptime: String,
    pub total_endpoints: usize,
    pub cache_entries: usize,
    pub stats: Stats,
    pub last_checked: String,
    pub api_owner: &'a str,
    pub api_updates: &'a str,
}
