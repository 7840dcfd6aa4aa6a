/// Router assembly and request handlers
///
/// Both POST endpoints share one relay pipeline: an adapter turns the
/// route's body shape into a `ChatCompletionRequest`, then `relay_chat`
/// performs the single outbound call and outcome mapping.

use std::sync::Arc;

use axum::extract::Extension;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::http::{add_cors, add_no_store};
use crate::models::{ChatCompletionRequest, ItineraryRequest, PromptRequest};
use crate::prompt::{build_itinerary_prompt, ITINERARY_SYSTEM_PROMPT, ROUTE_SYSTEM_PROMPT};
use crate::upstream::{relay_chat, ChatTransport};

/// Shared per-process state: immutable configuration plus the outbound
/// transport, injected at construction so tests can substitute fakes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub transport: Arc<dyn ChatTransport>,
}

impl AppState {
    pub fn new(config: ServerConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    fn api_key(&self) -> Result<&str, ApiError> {
        self.config
            .cerebras_api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey)
    }
}

/// Assemble the service router
///
/// Only /travel answers OPTIONS explicitly; /api/route has no pre-flight
/// branch and any non-POST method there falls through to the 405 handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/travel",
            post(plan_itinerary)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/route",
            post(relay_route).fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// Health check endpoint
async fn health() -> Response {
    add_cors(Json(json!({"status": "healthy"})).into_response())
}

/// CORS pre-flight: empty body, CORS headers only
async fn preflight() -> Response {
    add_cors(StatusCode::OK.into_response())
}

async fn method_not_allowed() -> Response {
    ApiError::MethodNotAllowed.into_response()
}

/// POST /travel — structured itinerary request, full upstream relay
async fn plan_itinerary(Extension(state): Extension<AppState>, body: String) -> Response {
    match itinerary_relay(&state, &body).await {
        Ok(upstream_body) => add_cors(json_passthrough(upstream_body)),
        Err(err) => err.into_response(),
    }
}

async fn itinerary_relay(state: &AppState, body: &str) -> Result<String, ApiError> {
    let request: ItineraryRequest =
        serde_json::from_str(body).map_err(|e| ApiError::BadPayload(e.to_string()))?;
    let api_key = state.api_key()?;

    tracing::info!(
        "[TRAVEL] Itinerary request: location={}, days={}, duration={}min, route={:?}",
        request.location,
        request.days(),
        request.duration_minutes(),
        request.route_type
    );

    let chat =
        ChatCompletionRequest::json_chat(ITINERARY_SYSTEM_PROMPT, build_itinerary_prompt(&request));
    relay_chat(state.transport.as_ref(), api_key, &chat).await
}

/// POST /api/route — raw prompt relay with cache suppression
async fn relay_route(Extension(state): Extension<AppState>, body: String) -> Response {
    match route_relay(&state, &body).await {
        Ok(upstream_body) => add_no_store(add_cors(json_passthrough(upstream_body))),
        Err(err) => add_no_store(err.into_response()),
    }
}

async fn route_relay(state: &AppState, body: &str) -> Result<String, ApiError> {
    let request: PromptRequest =
        serde_json::from_str(body).map_err(|e| ApiError::BadPayload(e.to_string()))?;
    let api_key = state.api_key()?;

    tracing::info!("[ROUTE] Prompt relay request: {} chars", request.prompt.len());

    let chat = ChatCompletionRequest::json_chat(ROUTE_SYSTEM_PROMPT, request.prompt);
    relay_chat(state.transport.as_ref(), api_key, &chat).await
}

/// Relay the upstream body untouched, declared as JSON
fn json_passthrough(body: String) -> Response {
    let mut resp = body.into_response();
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    resp
}
