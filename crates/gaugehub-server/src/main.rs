//! gaugehub server
//!
//! - CRUD API on `server.listen`: /metrics, /agents, /kick
//! - Exposition on `server.exposition_listen`: GET /metrics
//! - Config from `GAUGEHUB_CONFIG` (default `gaugehub.yaml`)

use tracing_subscriber::{fmt, EnvFilter};

use gaugehub_core::error::{GaugeHubError, Result};
use gaugehub_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "gaugehub stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let listen = cfg.server.listen_addr()?;
    let exposition_listen = cfg.server.exposition_addr()?;

    let state = app_state::AppState::new(&cfg)?;
    let api = router::build_router(state.clone());
    let exposition = router::build_exposition_router(state);

    let api_listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| GaugeHubError::Internal(format!("bind {listen} failed: {e}")))?;
    let exposition_listener = tokio::net::TcpListener::bind(exposition_listen)
        .await
        .map_err(|e| GaugeHubError::Internal(format!("bind {exposition_listen} failed: {e}")))?;

    tracing::info!(%listen, "gaugehub API starting");
    tracing::info!(%exposition_listen, "gaugehub exposition starting");

    tokio::try_join!(
        async {
            axum::serve(api_listener, api)
                .await
                .map_err(|e| GaugeHubError::Internal(format!("api server failed: {e}")))
        },
        async {
            axum::serve(exposition_listener, exposition)
                .await
                .map_err(|e| GaugeHubError::Internal(format!("exposition server failed: {e}")))
        },
    )?;
    Ok(())
}
