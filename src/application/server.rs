use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::application::routes::app_router;
use crate::application::state::AppState;
use crate::infrastructure::immich::ImmichClient;

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub immich_url: String,
    pub immich_api_key: String,
    pub superlike_album_id: Option<String>,
    pub enrich_random: bool,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    // Fail fast on a bad base URL instead of erroring on the first request.
    let immich = ImmichClient::from_base_url(&config.immich_url, &config.immich_api_key)
        .context("invalid PICSIFT_IMMICH_URL")?;

    if config.superlike_album_id.is_none() {
        tracing::warn!("no superlike album configured; /api/superlike will report 500");
    }

    let state = AppState::new(immich, config.superlike_album_id, config.enrich_random);

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let app = app_router(state);

    info!(
        address = %config.bind_address,
        upstream = %config.immich_url,
        enrich_random = config.enrich_random,
        "starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
