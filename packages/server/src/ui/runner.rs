//! Server startup.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;

use super::{error::ServerError, router::build_router, signal::shutdown_signal, state::AppState};

/// Bind to the configured address and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;

    let app = build_router(Arc::new(AppState::in_memory()));

    tracing::info!("Agenda server is listening at http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}
