use crate::domain::error::FetchError;
use async_trait::async_trait;

/// A single GET against the mention search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl SearchRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw HTTP response. Status interpretation is left to the caller.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub status: u16,
    pub body: String,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Pluggable HTTP capability used by the mention fetcher.
/// Returns `Err` only when no response was received at all.
#[async_trait]
pub trait MentionTransport: Send + Sync {
    /// Transport name for logging (e.g., "reqwest")
    fn name(&self) -> &str;

    async fn get(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError>;
}
