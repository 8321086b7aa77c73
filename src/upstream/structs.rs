/// JSON payload of one upstream page request.
pub mod page_request;

/// HTTP client for the Binance C2C advertisement search endpoint.
pub mod binance_p2p_client;
