use async_trait::async_trait;
use std::time::Duration;

/// Waits between outbound requests to stay under external rate limits.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}
