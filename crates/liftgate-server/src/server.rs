//! Server startup and shutdown.

use liftgate_core::{Result, SiteConfig};

use crate::routes::build_router;
use crate::state::AppState;

/// Bind and serve until SIGINT or SIGTERM.
pub async fn serve(config: SiteConfig) -> Result<()> {
    let addr = config.bind_addr();
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("server stopped");
    Ok(())
}

/// Completes on SIGINT or SIGTERM.
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm =
        signal(SignalKind::terminate()).expect("failed to create SIGTERM signal handler");
    let mut sigint =
        signal(SignalKind::interrupt()).expect("failed to create SIGINT signal handler");

    tokio::select! {
        _ = sigterm.recv() => {
            log::info!("received SIGTERM, shutting down");
        }
        _ = sigint.recv() => {
            log::info!("received SIGINT, shutting down");
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("received shutdown signal, shutting down"),
        Err(err) => log::error!("error listening for shutdown signal: {err}"),
    }
}
