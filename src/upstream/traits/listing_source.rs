use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;
use crate::upstream::errors::UpstreamError;
use crate::upstream::structs::page_request::PageRequest;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetches one page and returns the raw advertisement entries in upstream order.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Value>, UpstreamError>;
}
