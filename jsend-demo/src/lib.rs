//! JSend demo service
//!
//! Shows the axum middleware end to end: every route answers through the
//! per-request `JSendReply`.

pub mod config;
pub mod routes;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use jsend::{JSend, JSendConfig};
use jsend_axum::JSendRouterExt;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jsend: JSend,
}

impl AppState {
    pub fn new(config: JSendConfig) -> Self {
        info!(mode = ?config.mode, compat = ?config.compat, "Initialized JSend demo state");
        Self {
            jsend: JSend::new(config),
        }
    }
}

/// Health check endpoint
async fn healthz() -> impl IntoResponse {
    "OK"
}

/// Create the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/users/:id", get(routes::get_user))
        .route("/envelopes/validate", post(routes::validate_envelope))
        .route("/envelopes/forward", post(routes::forward_envelope))
        .route("/boom", get(routes::boom))
        .jsend(state.jsend)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
