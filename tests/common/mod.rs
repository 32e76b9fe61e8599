//! Shared test helpers: scripted transport, recording pacer, CSV fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use cryptobuzz::config::AnalysisConfig;
use cryptobuzz::domain::error::FetchError;
use cryptobuzz::domain::ports::mention_transport::{MentionTransport, SearchRequest, SearchResponse};
use cryptobuzz::domain::ports::pacer::Pacer;
use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted reply for one asset.
#[derive(Clone)]
pub enum Reply {
    Mentions(usize),
    Status(u16),
    Body(&'static str),
    Unreachable,
}

/// Answers by the `q` parameter; unknown assets are unreachable.
pub struct FakeTransport {
    replies: HashMap<String, Reply>,
    pub requests: Mutex<Vec<SearchRequest>>,
}

impl FakeTransport {
    pub fn new(replies: &[(&str, Reply)]) -> Self {
        Self {
            replies: replies
                .iter()
                .map(|(asset, reply)| (asset.to_string(), reply.clone()))
                .collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn queried_assets(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| r.param("q").map(String::from))
            .collect()
    }
}

#[async_trait]
impl MentionTransport for FakeTransport {
    fn name(&self) -> &str {
        "fake"
    }

    async fn get(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        self.requests.lock().unwrap().push(request.clone());
        let asset = request.param("q").unwrap_or_default();
        match self.replies.get(asset).cloned().unwrap_or(Reply::Unreachable) {
            Reply::Mentions(n) => {
                let data: Vec<serde_json::Value> = (0..n).map(|i| serde_json::json!({ "id": i })).collect();
                Ok(SearchResponse {
                    status: 200,
                    body: serde_json::json!({ "data": data }).to_string(),
                })
            }
            Reply::Status(status) => Ok(SearchResponse {
                status,
                body: String::new(),
            }),
            Reply::Body(body) => Ok(SearchResponse {
                status: 200,
                body: body.to_string(),
            }),
            Reply::Unreachable => Err(FetchError::Network("connection refused".into())),
        }
    }
}

/// Records every pause instead of sleeping.
#[derive(Default)]
pub struct RecordingPacer {
    pub pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn count(&self) -> usize {
        self.pauses.lock().unwrap().len()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

pub fn assets(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn config_for(data_file: &Path, names: &[&str]) -> AnalysisConfig {
    let mut config = AnalysisConfig::default();
    config.data_file = data_file.to_path_buf();
    config.assets = assets(names);
    config.fetch.pause = Duration::from_millis(1000);
    config
}

pub fn write_csv(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("crypto_data.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Local server that accepts one connection and never answers it.
pub fn silent_server(hold: Duration) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        if let Ok((_stream, _)) = listener.accept() {
            std::thread::sleep(hold);
        }
    });
    addr
}
