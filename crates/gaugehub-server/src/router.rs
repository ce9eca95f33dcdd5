//! Axum router wiring.
//!
//! Two routers, served on separate listeners: the CRUD API and the
//! pull-based exposition endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(api::metrics::list_metrics))
        .route(
            "/metrics/:name",
            get(api::metrics::get_metric)
                .post(api::metrics::create_metric)
                .put(api::metrics::update_metric)
                .delete(api::metrics::delete_metric),
        )
        .route("/agents", get(api::agents::list_agents))
        .route(
            "/agents/:id",
            post(api::agents::register_agent).delete(api::agents::deregister_agent),
        )
        .route("/kick", post(api::agents::kick_all))
        .route("/kick/:id", post(api::agents::kick_agent))
        .with_state(state)
}

pub fn build_exposition_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::exposition))
        .with_state(state)
}
