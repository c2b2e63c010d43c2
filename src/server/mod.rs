//! HTTP surface: router, shared state and the serve loop.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::domain::ports::RecordLookup;
use crate::utils::error::{Result, VerifyError};

pub use error::{ApiError, ApiResult};

/// Shared application state. The lookup is read-only, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn RecordLookup>,
}

impl AppState {
    pub fn new(lookup: impl RecordLookup + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

/// Create the application router with request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/verify", get(routes::verify))
        .route("/health", get(routes::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Serves `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| VerifyError::ServerError {
            message: e.to_string(),
        })
}
