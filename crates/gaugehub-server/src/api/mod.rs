//! CRUD HTTP API over the metric registry and agent directory.
//!
//! Handlers extract one identifier (plus the optional `value` query
//! parameter), call exactly one registry operation, and translate the result
//! through [`finish`], which also feeds the request counters.

pub mod agents;
pub mod error;
pub mod metrics;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};

use gaugehub_core::error::{GaugeHubError, Result};

use crate::app_state::AppState;

pub use error::ApiError;

/// Banner served on `GET /`.
pub async fn index() -> &'static str {
    "API Metrics management"
}

/// Unwrap a path segment, turning an extractor rejection (e.g. a segment that
/// is not valid UTF-8 once decoded) into `BadRequest`.
pub(crate) fn path_param(p: std::result::Result<Path<String>, PathRejection>) -> Result<String> {
    p.map(|Path(v)| v).map_err(|e| GaugeHubError::BadRequest(e.body_text()))
}

/// Same as [`path_param`] for query strings (e.g. a repeated `value`).
pub(crate) fn query_param<T>(q: std::result::Result<Query<T>, QueryRejection>) -> Result<T> {
    q.map(|Query(v)| v).map_err(|e| GaugeHubError::BadRequest(e.body_text()))
}

/// Map an operation result to a response and count it.
pub(crate) fn finish(state: &AppState, route: &'static str, res: Result<Response>) -> Response {
    let resp = match res {
        Ok(resp) => resp,
        Err(e) => {
            let code = e.client_code().as_str();
            state
                .api_metrics()
                .registry_errors
                .inc(&[("op", route), ("code", code)]);
            tracing::debug!(%route, %code, error = %e, "request rejected");
            ApiError::from(e).into_response()
        }
    };
    state
        .api_metrics()
        .requests
        .inc(&[("route", route), ("status", resp.status().as_str())]);
    resp
}
