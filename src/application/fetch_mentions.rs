use crate::config::FetchSettings;
use crate::domain::error::FetchError;
use crate::domain::ports::mention_transport::{MentionTransport, SearchRequest, SearchResponse};
use crate::domain::ports::pacer::Pacer;
use crate::domain::values::date_range::DateRange;
use crate::domain::values::mention_counts::{known_count, MentionCounts};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Counts forum mentions per asset, one paced request at a time.
pub struct FetchMentionsUseCase {
    transport: Arc<dyn MentionTransport>,
    pacer: Arc<dyn Pacer>,
    settings: FetchSettings,
}

impl FetchMentionsUseCase {
    pub fn new(
        transport: Arc<dyn MentionTransport>,
        pacer: Arc<dyn Pacer>,
        settings: FetchSettings,
    ) -> Self {
        Self {
            transport,
            pacer,
            settings,
        }
    }

    /// Every distinct asset gets exactly one entry; failed lookups map to `None`.
    /// Never fails as a whole.
    pub async fn execute(&self, assets: &[String], window: &DateRange) -> MentionCounts {
        let mut mentions = MentionCounts::new();

        for asset in assets {
            if mentions.contains_key(asset) {
                debug!(asset = %asset, "Skipping duplicate asset");
                continue;
            }

            let count = match self.fetch_one(asset, window).await {
                Ok(count) => {
                    debug!(asset = %asset, count, "Fetched mentions");
                    Some(count)
                }
                Err(e) => {
                    warn!(asset = %asset, transport = self.transport.name(), "Failed to fetch mentions: {e}");
                    None
                }
            };
            mentions.insert(asset.clone(), count);

            self.pacer.pause(self.settings.pause).await;
        }

        info!(
            requested = mentions.len(),
            succeeded = known_count(&mentions),
            %window,
            "Fetched mention counts"
        );
        mentions
    }

    async fn fetch_one(&self, asset: &str, window: &DateRange) -> Result<u64, FetchError> {
        let request = self.build_request(asset, window);
        let response = self.transport.get(&request).await?;
        count_mentions(&response)
    }

    pub fn build_request(&self, asset: &str, window: &DateRange) -> SearchRequest {
        SearchRequest {
            url: self.settings.base_url.clone(),
            params: vec![
                ("q".to_string(), asset.to_string()),
                ("after".to_string(), window.start_param()),
                ("before".to_string(), window.end_param()),
                ("subreddit".to_string(), self.settings.subreddit.clone()),
                ("size".to_string(), "0".to_string()),
                ("aggs".to_string(), "created_utc".to_string()),
            ],
        }
    }
}

/// Length of the `data` array in a search response. A JSON object without a
/// `data` key counts as zero.
pub fn count_mentions(response: &SearchResponse) -> Result<u64, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }

    let body: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|e| FetchError::BadResponse(format!("invalid JSON: {e}")))?;

    let object = body
        .as_object()
        .ok_or_else(|| FetchError::BadResponse("expected a JSON object".into()))?;

    match object.get("data") {
        None => Ok(0),
        Some(serde_json::Value::Array(items)) => Ok(items.len() as u64),
        Some(other) => Err(FetchError::BadResponse(format!(
            "\"data\" is not an array: {other}"
        ))),
    }
}
