/// Outbound transport to the chat-completions provider
/// One implementation talks to the real endpoint; tests substitute a
/// deterministic fake behind the same trait

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::ChatCompletionRequest;

/// Raw outcome of one chat-completion POST
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability: send one chat-completion request, receive status + body
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_chat(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<UpstreamReply>;
}

/// reqwest-backed client for the Cerebras chat-completions endpoint
pub struct CerebrasClient {
    http: reqwest::Client,
    chat_url: String,
}

impl CerebrasClient {
    pub fn new(chat_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_url: chat_url.into(),
        }
    }
}

#[async_trait]
impl ChatTransport for CerebrasClient {
    async fn send_chat(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<UpstreamReply> {
        let response = self
            .http
            .post(&self.chat_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(UpstreamReply { status, body })
    }
}

/// Send one chat request and map the outcome to the relay contract
///
/// Success means a 2xx reply whose JSON body carries a non-null
/// `choices[0].message`; the raw body is then passed through untouched so
/// the caller relays exactly what the provider produced.
pub async fn relay_chat(
    transport: &dyn ChatTransport,
    api_key: &str,
    request: &ChatCompletionRequest,
) -> Result<String, ApiError> {
    let reply = transport
        .send_chat(api_key, request)
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !reply.is_success() {
        tracing::warn!(
            "[UPSTREAM] Provider answered with status {}",
            reply.status
        );
        return Err(ApiError::UpstreamStatus {
            status: reply.status,
            details: reply.body,
        });
    }

    let parsed: Value =
        serde_json::from_str(&reply.body).map_err(|_| ApiError::MalformedUpstream)?;

    let message = parsed
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|first| first.get("message"));

    match message {
        Some(m) if !m.is_null() => Ok(reply.body),
        _ => Err(ApiError::MalformedUpstream),
    }
}
