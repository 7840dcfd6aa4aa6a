/// Chat-completions endpoint used when CEREBRAS_URL is not set
pub const DEFAULT_CHAT_URL: &str = "https://api.cerebras.ai/v1/chat/completions";

/// Configuration snapshot taken once at startup and injected into the
/// handlers. The API key stays optional: a missing secret surfaces as a
/// per-request configuration error rather than a startup crash, so the
/// service still answers health checks and pre-flights without it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub cerebras_api_key: Option<String>,
    pub chat_url: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let cerebras_api_key = std::env::var("CEREBRAS_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let chat_url = std::env::var("CEREBRAS_URL")
            .unwrap_or_else(|_| DEFAULT_CHAT_URL.to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .unwrap_or(8080);

        Self {
            cerebras_api_key,
            chat_url,
            port,
        }
    }
}
