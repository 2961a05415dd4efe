//! Listener setup and the serve loop

use std::future::Future;

use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::config::AppConfig;
use crate::error::Result;

/// Bind the configured address. A port that is already taken is an error.
pub async fn bind(config: &AppConfig) -> Result<TcpListener> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    Ok(listener)
}

/// Serve the API on `listener` until `shutdown` resolves
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Mock service is running on port {}", addr.port());

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
