use axum::{Router, extract::State, http::StatusCode, routing::get};

use vcode_core::health::{healthz, readiness};
use vcode_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::state::AppState;

/// `GET /readyz`: ready once Redis answers `PING`.
async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.code_store().ping().await)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .with_state(state)
        .layer(trace_layer())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
}
