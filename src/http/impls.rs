pub mod error_response;
pub mod p2p_parameters;
