/// Itinerary relay service library
/// Exposes request shaping, the outbound transport seam and router
/// assembly for the HTTP binary and for integration tests

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod prompt;
pub mod routes;
pub mod upstream;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{build_router, AppState};
pub use upstream::{CerebrasClient, ChatTransport, UpstreamReply};
