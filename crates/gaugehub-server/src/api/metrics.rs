use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use gaugehub_core::error::{GaugeHubError, Result};
use gaugehub_core::protocol::MetricSample;
use gaugehub_core::validate::parse_gauge_value;

use super::{finish, path_param, query_param};
use crate::app_state::AppState;

type NameParam = std::result::Result<Path<String>, PathRejection>;
type ValueParam = std::result::Result<Query<ValueQuery>, QueryRejection>;

/// `?value=<number>`; kept as text so malformed input reaches the registry's
/// own validation instead of failing inside the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ValueQuery {
    #[serde(default)]
    pub value: Option<String>,
}

pub async fn list_metrics(State(state): State<AppState>) -> Response {
    let res = state.metrics().list().map(|mut samples| {
        samples.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(count = samples.len(), "metrics listed");
        Json(samples).into_response()
    });
    finish(&state, "metrics.list", res)
}

pub async fn get_metric(State(state): State<AppState>, name: NameParam) -> Response {
    let res = path_param(name).and_then(|name| {
        let value = state.metrics().get(&name)?;
        Ok(Json(MetricSample::new(name, value)).into_response())
    });
    finish(&state, "metrics.get", res)
}

pub async fn create_metric(
    State(state): State<AppState>,
    name: NameParam,
    q: ValueParam,
) -> Response {
    let res = create(&state, name, q);
    finish(&state, "metrics.create", res)
}

fn create(state: &AppState, name: NameParam, q: ValueParam) -> Result<Response> {
    let name = path_param(name)?;
    let initial = match query_param(q)?.value.as_deref() {
        Some(raw) => parse_gauge_value(raw)?,
        None => 0.0,
    };
    state.metrics().create(&name, initial)?;
    tracing::info!(metric = %name, value = initial, "metric created");
    Ok((StatusCode::CREATED, Json(MetricSample::new(name, initial))).into_response())
}

pub async fn update_metric(
    State(state): State<AppState>,
    name: NameParam,
    q: ValueParam,
) -> Response {
    let res = update(&state, name, q);
    finish(&state, "metrics.update", res)
}

fn update(state: &AppState, name: NameParam, q: ValueParam) -> Result<Response> {
    let name = path_param(name)?;
    let raw = query_param(q)?
        .value
        .ok_or_else(|| GaugeHubError::InvalidValue("missing value query parameter".into()))?;
    let value = state.metrics().update(&name, &raw)?;
    tracing::info!(metric = %name, value, "metric updated");
    Ok(Json(MetricSample::new(name, value)).into_response())
}

pub async fn delete_metric(State(state): State<AppState>, name: NameParam) -> Response {
    let res = path_param(name).and_then(|name| {
        state.metrics().delete(&name)?;
        tracing::info!(metric = %name, "metric deleted");
        Ok(StatusCode::NO_CONTENT.into_response())
    });
    finish(&state, "metrics.delete", res)
}
