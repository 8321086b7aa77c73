use crate::config::structs::configuration::Configuration;
use crate::http::structs::error_response::ErrorResponse;

impl<'a> ErrorResponse<'a> {
    pub fn new(error: impl Into<String>, config: &'a Configuration) -> ErrorResponse<'a> {
        ErrorResponse {
            error: error.into(),
            api_owner: &config.api_owner,
            api_updates: &config.api_updates,
        }
    }
}
