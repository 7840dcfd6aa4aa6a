/// Request-scoped data shapes
///
/// Inbound bodies come from loosely-typed browser frontends, so numeric
/// fields accept numbers or numeric strings and fall back to defaults
/// instead of rejecting the request. Outbound types mirror the
/// chat-completions wire format.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const CHAT_MODEL: &str = "zai-glm-4.7";
pub const CHAT_TEMPERATURE: f32 = 0.2;

pub const DEFAULT_DURATION_MINUTES: u32 = 120;
pub const DEFAULT_DAYS_COUNT: u32 = 1;

/// Structured itinerary request accepted on POST /travel
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub exact_location: Option<String>,
    #[serde(default)]
    pub route_type: RouteKind,
    #[serde(default, deserialize_with = "lenient_positive_int")]
    pub duration: Option<u32>,
    #[serde(default, deserialize_with = "lenient_positive_int")]
    pub days_count: Option<u32>,
}

impl ItineraryRequest {
    /// Start point every day of the route must begin at
    pub fn effective_origin(&self) -> &str {
        match self.exact_location.as_deref() {
            Some(exact) if !exact.is_empty() => exact,
            _ => &self.location,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration.unwrap_or(DEFAULT_DURATION_MINUTES)
    }

    pub fn days(&self) -> u32 {
        self.days_count.unwrap_or(DEFAULT_DAYS_COUNT)
    }
}

/// Route framing requested by the client; anything that is not the
/// literal string "circular" is a linear route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteKind {
    Circular,
    #[default]
    Linear,
}

impl<'de> Deserialize<'de> for RouteKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("circular") => RouteKind::Circular,
            _ => RouteKind::Linear,
        })
    }
}

/// Raw-prompt request accepted on POST /api/route
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// One message of the two-message conversation sent upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Chat-completion request with the fixed model settings
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub response_format: ResponseFormat,
}

impl ChatCompletionRequest {
    /// System instruction plus one user prompt, asking for a JSON-only reply
    pub fn json_chat(system: &str, user_prompt: String) -> Self {
        Self {
            model: CHAT_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            temperature: CHAT_TEMPERATURE,
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
        }
    }
}

fn lenient_positive_int<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|n| *n > 0).map(|n| n as u32))
}
