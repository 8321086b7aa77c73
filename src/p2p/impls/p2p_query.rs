use crate::p2p::enums::sort_field::SortField;
use crate::p2p::enums::sort_order::SortOrder;
use crate::p2p::enums::trade_type::TradeType;
use crate::p2p::errors::ValidationError;
use crate::p2p::structs::p2p_filters::P2pFilters;
use crate::p2p::structs::p2p_query::P2pQuery;
use crate::p2p::structs::p2p_query_params::P2pQueryParams;
use crate::p2p::structs::query_key::QueryKey;
use crate::p2p::vocabulary::{fiat_currencies, is_supported_asset, payment_method_name, payment_methods_for, ALL_PAY_METHODS, CRYPTO_ASSETS};
use crate::upstream::structs::page_request::PageRequest;

pub const MAX_LIMIT: usize = 1000;

impl P2pQuery {
    /// Normalizes and validates the raw parameters, in the order the errors are reported.
    pub fn from_params(params: P2pQueryParams) -> Result<P2pQuery, ValidationError> {
        let asset = params.asset.trim().to_uppercase();
        let pay_type = params.pay_type.trim().to_uppercase();
        let pay_method = params.pay_method.trim().to_uppercase();
        let trade_type = params.trade_type.trim().to_uppercase();
        let sort_by = params.sort_by.trim().to_lowercase();
        let order = params.order.trim().to_lowercase();

        let online_only = match params.online_only.as_deref() {
            None => false,
            Some(value) => parse_flag(value)
                .ok_or_else(|| ValidationError::InvalidParameter(format!("online_only must be a boolean, got '{value}'")))?,
        };

        if let Some(rate) = params.min_completion_rate {
            if !rate.is_finite() {
                return Err(ValidationError::InvalidParameter(format!("min_completion_rate must be a finite number, got '{rate}'")));
            }
        }

        if params.limit > MAX_LIMIT {
            return Err(ValidationError::LimitExceeded(MAX_LIMIT));
        }

        if !is_supported_asset(&asset) {
            return Err(ValidationError::UnsupportedAsset(CRYPTO_ASSETS.join(", ")));
        }

        let trade_type = TradeType::parse(&trade_type).ok_or(ValidationError::InvalidTradeType)?;

        let methods = payment_methods_for(&pay_type)
            .ok_or_else(|| ValidationError::UnsupportedPayType(fiat_currencies().join(", ")))?;

        let pay_method_name = if pay_method == ALL_PAY_METHODS {
            None
        } else {
            match payment_method_name(&pay_type, &pay_method) {
                Some(name) => Some(name),
                None => {
                    return Err(ValidationError::InvalidPayMethod {
                        pay_type,
                        supported: methods.iter().map(|(code, _)| *code).collect::<Vec<_>>().join(", "),
                    });
                }
            }
        };

        Ok(P2pQuery {
            asset,
            pay_type,
            pay_method,
            pay_method_name,
            trade_type,
            limit: params.limit,
            sort_field: SortField::parse(&sort_by),
            sort_by,
            sort_order: SortOrder::parse(&order),
            order,
            filters: P2pFilters::new(params.min_completion_rate, params.min_orders, online_only),
        })
    }

    /// Built only from what changes the upstream call; sorting and filters are left out.
    pub fn cache_key(&self) -> QueryKey {
        QueryKey::new(&self.asset, &self.pay_type, self.trade_type.as_str(), &self.pay_method, self.limit)
    }

    pub fn page_request(&self, page: usize, rows: usize) -> PageRequest {
        PageRequest::new(&self.asset, &self.pay_type, self.trade_type.as_str(), self.pay_method_name, page, rows)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None
    }
}
