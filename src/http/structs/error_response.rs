use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse<'a> {
    pub error: String,
    pub api_owner: &'a str,
    pub api_updates: &'a str,
}
