use crate::domain::error::FetchError;
use crate::domain::ports::mention_transport::{MentionTransport, SearchRequest, SearchResponse};
use async_trait::async_trait;
use std::time::Duration;

/// `MentionTransport` over a shared reqwest client with a per-request timeout.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("cryptobuzz/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl MentionTransport for ReqwestTransport {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn get(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        let resp = self
            .client
            .get(&request.url)
            .query(&request.params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Network(format!("request timed out: {e}"))
                } else {
                    FetchError::Network(e.to_string())
                }
            })?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read body: {e}")))?;

        Ok(SearchResponse { status, body })
    }
}
