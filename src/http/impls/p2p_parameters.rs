use crate::http::structs::p2p_parameters::P2pParameters;
use crate::p2p::structs::p2p_query::P2pQuery;

impl<'a> P2pParameters<'a> {
    pub fn full(query: &'a P2pQuery) -> P2pParameters<'a> {
        P2pParameters {
            limit: Some(query.limit),
            sort_by: Some(&query.sort_by),
            order: Some(&query.order),
            filters_applied: Some(&query.filters),
            ..Self::brief(query)
        }
    }

    pub fn brief(query: &'a P2pQuery) -> P2pParameters<'a> {
        P2pParameters {
            asset: &query.asset,
            pay_type: &query.pay_type,
            pay_method: &query.pay_method,
            trade_type: query.trade_type.as_str(),
            limit: None,
            sort_by: None,
            order: None,
            filters_applied: None,
        }
    }
}
