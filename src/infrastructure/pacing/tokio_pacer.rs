use crate::domain::ports::pacer::Pacer;
use async_trait::async_trait;
use std::time::Duration;

/// Sleeps on the tokio timer.
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
