//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness (API listener)
//! - `/metrics` : Prometheus text format (exposition listener)

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::api::ApiError;
use crate::app_state::AppState;
use crate::obs;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn exposition(State(state): State<AppState>) -> Response {
    match obs::render(state.metrics(), state.agents(), state.api_metrics()) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
