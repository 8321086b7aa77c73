use log::warn;
use serde_json::{Map, Value};
use crate::common::common::round_to;
use crate::p2p::structs::listing_record::ListingRecord;

impl ListingRecord {
    /// Reshapes one raw upstream entry.
    ///
    /// Entries without a non-empty `adv` or `advertiser` object are skipped, as are entries
    /// whose numeric fields are present but unreadable. Missing fields fall back to defaults.
    pub fn from_upstream(raw: &Value) -> Option<ListingRecord> {
        let adv = non_empty_object(raw.get("adv"))?;
        let advertiser = non_empty_object(raw.get("advertiser"))?;

        let (price, available_amount, min_order_amount, max_order_amount, finish_rate) = match (
            number_field(adv, "price"),
            number_field(adv, "surplusAmount"),
            number_field(adv, "minSingleTransAmount"),
            number_field(adv, "maxSingleTransAmount"),
            number_field(advertiser, "monthFinishRate"),
        ) {
            (Some(price), Some(available), Some(min), Some(max), Some(rate)) => (price, available, min, max, rate),
            _ => {
                warn!("[P2P] Skipping listing {} with unreadable numeric fields", string_field(adv, "advNo", ""));
                return None;
            }
        };

        let monthly_orders = match advertiser.get("monthOrderCount") {
            None => 0,
            Some(value) => match value.as_u64().or_else(|| value.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64)) {
                Some(count) => count,
                None => {
                    warn!("[P2P] Skipping listing {} with unreadable order count", string_field(adv, "advNo", ""));
                    return None;
                }
            },
        };

        let payment_methods = adv.get("tradeMethods")
            .and_then(Value::as_array)
            .map(|methods| methods.iter()
                .map(|method| method.get("tradeMethodName").and_then(Value::as_str).unwrap_or("").to_string())
                .collect())
            .unwrap_or_default();

        let user_type = string_field(advertiser, "userType", "user");
        let online_status = if user_type == "merchant" { "online" } else { "offline" };

        Some(ListingRecord {
            id: string_field(adv, "advNo", ""),
            seller_name: string_field(advertiser, "nickName", "Unknown"),
            price,
            fiat_unit: string_field(adv, "fiatUnit", ""),
            available_amount,
            min_order_amount,
            max_order_amount,
            completion_rate: round_to(finish_rate * 100.0, 2),
            monthly_orders,
            payment_methods,
            online_status: online_status.to_string(),
            user_type,
        })
    }

    pub fn is_merchant(&self) -> bool {
        self.user_type == "merchant"
    }
}

fn non_empty_object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.and_then(Value::as_object).filter(|object| !object.is_empty())
}

/// Missing fields read as `0`. Numbers and numeric strings are accepted, anything else is not.
fn number_field(object: &Map<String, Value>, name: &str) -> Option<f64> {
    match object.get(name) {
        None => Some(0.0),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
}

fn string_field(object: &Map<String, Value>, name: &str, default: &str) -> String {
    match object.get(name) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => default.to_string(),
    }
}
