/// Shared test fixtures: fake transports and router construction

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use itinerary_api::config::ServerConfig;
use itinerary_api::models::ChatCompletionRequest;
use itinerary_api::routes::{build_router, AppState};
use itinerary_api::upstream::{ChatTransport, UpstreamReply};

/// Transport fake: answers with a canned reply and records every request
pub struct RecordingTransport {
    reply: UpstreamReply,
    seen: Mutex<Vec<(String, ChatCompletionRequest)>>,
}

impl RecordingTransport {
    pub fn with_reply(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: UpstreamReply {
                status,
                body: body.to_string(),
            },
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn recorded(&self) -> Vec<(String, ChatCompletionRequest)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_chat(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> anyhow::Result<UpstreamReply> {
        self.seen
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));
        Ok(self.reply.clone())
    }
}

/// Transport fake whose outbound call never completes with a reply
pub struct FailingTransport;

#[async_trait]
impl ChatTransport for FailingTransport {
    async fn send_chat(
        &self,
        _api_key: &str,
        _request: &ChatCompletionRequest,
    ) -> anyhow::Result<UpstreamReply> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

pub fn test_config(api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        cerebras_api_key: api_key.map(|k| k.to_string()),
        chat_url: "http://127.0.0.1:0/unused".to_string(),
        port: 0,
    }
}

pub fn app_with(transport: Arc<dyn ChatTransport>, api_key: Option<&str>) -> Router {
    build_router(AppState::new(test_config(api_key), transport))
}
