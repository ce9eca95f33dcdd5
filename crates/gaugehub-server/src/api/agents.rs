use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use gaugehub_core::protocol::KickSummary;

use super::{finish, path_param};
use crate::app_state::AppState;

type IdParam = std::result::Result<Path<String>, PathRejection>;

pub async fn list_agents(State(state): State<AppState>) -> Response {
    let res = state.agents().records().map(|mut records| {
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Json(records).into_response()
    });
    finish(&state, "agents.list", res)
}

pub async fn register_agent(State(state): State<AppState>, id: IdParam) -> Response {
    let res = path_param(id).and_then(|id| {
        let record = state.agents().register(&id)?;
        tracing::info!(agent = %id, "agent registered");
        Ok((StatusCode::CREATED, Json(record)).into_response())
    });
    finish(&state, "agents.register", res)
}

pub async fn deregister_agent(State(state): State<AppState>, id: IdParam) -> Response {
    let res = path_param(id).and_then(|id| {
        state.agents().deregister(&id)?;
        tracing::info!(agent = %id, "agent deregistered");
        Ok(StatusCode::NO_CONTENT.into_response())
    });
    finish(&state, "agents.deregister", res)
}

pub async fn kick_all(State(state): State<AppState>) -> Response {
    let res = state.agents().kick_all().map(|kicked| {
        state.api_metrics().kicks.inc(&[("scope", "all")]);
        tracing::info!(kicked, "all agents kicked");
        Json(KickSummary { kicked }).into_response()
    });
    finish(&state, "kick.all", res)
}

pub async fn kick_agent(State(state): State<AppState>, id: IdParam) -> Response {
    let res = path_param(id).and_then(|id| {
        state.agents().kick(&id)?;
        state.api_metrics().kicks.inc(&[("scope", "agent")]);
        tracing::info!(agent = %id, "agent kicked");
        Ok(Json(KickSummary { kicked: 1 }).into_response())
    });
    finish(&state, "kick.agent", res)
}
