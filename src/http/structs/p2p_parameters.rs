use serde::Serialize;
use crate::p2p::structs::p2p_filters::P2pFilters;

/// The "not found" variant only echoes the first four fields.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct P2pParameters<'a> {
    pub asset: &'a str,
    pub pay_type: &'a str,
    pub pay_method: &'a str,
    pub trade_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<&'a P2pFilters>,
}
