//! HTTP data structures.

/// State shared by the handlers of one server.
pub mod http_service_data;

/// `{error, api_owner, api_updates}` body.
pub mod error_response;

/// Echo of the effective `/p2p` parameters.
pub mod p2p_parameters;

/// `/p2p` body when listings were found.
pub mod p2p_found_response;

/// `/p2p` body when the upstream returned nothing.
pub mod p2p_empty_response;

/// `/api/health` body.
pub mod health_response;
