#[cfg(test)]
mod upstream_tests {
    mod page_request_tests {
        use crate::upstream::structs::page_request::PageRequest;
        use serde_json::json;

        #[test]
        fn test_page_request_serializes_upstream_field_names() {
            let request = PageRequest::new("USDT", "BDT", "SELL", None, 3, 20);
            let serialized = serde_json::to_value(&request).unwrap();
            assert_eq!(serialized, json!({
                "asset": "USDT",
                "fiat": "BDT",
                "tradeType": "SELL",
                "page": 3,
                "rows": 20,
                "payTypes": [],
                "publisherType": null,
                "merchantCheck": false
            }));
        }

        #[test]
        fn test_page_request_with_pay_method() {
            let request = PageRequest::new("BTC", "INR", "BUY", Some("GooglePay"), 1, 20);
            assert_eq!(request.pay_types, vec!["GooglePay".to_string()]);
        }
    }

    mod client_tests {
        use crate::config::structs::upstream_config::UpstreamConfig;
        use crate::upstream::structs::binance_p2p_client::BinanceP2pClient;
        use serde_json::json;
        use std::time::Duration;

        #[test]
        fn test_client_builds_from_default_config() {
            let client = BinanceP2pClient::new(&UpstreamConfig::default()).unwrap();
            assert_eq!(client.page_timeout, Duration::from_secs(15));
            assert!(client.url.starts_with("https://"));
        }

        #[test]
        fn test_extract_listings() {
            let body = json!({"code": "000000", "data": [{"adv": {}}, {"adv": {}}]});
            assert_eq!(BinanceP2pClient::extract_listings(body).len(), 2);
        }

        #[test]
        fn test_extract_listings_non_array_data_is_empty() {
            assert!(BinanceP2pClient::extract_listings(json!({"data": null})).is_empty());
            assert!(BinanceP2pClient::extract_listings(json!({"message": "busy"})).is_empty());
            assert!(BinanceP2pClient::extract_listings(json!([1, 2, 3])).is_empty());
        }
    }

    mod error_tests {
        use crate::upstream::errors::UpstreamError;

        #[test]
        fn test_error_display() {
            assert_eq!(format!("{}", UpstreamError::Timeout(4)), "Timeout fetching page 4");
            assert_eq!(format!("{}", UpstreamError::Status { page: 2, status: 503 }), "Error fetching page 2: 503");
        }
    }
}
