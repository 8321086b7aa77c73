pub mod binance_p2p_client;
pub mod page_request;
