//! JSON HTTP API for WeatherLab.
//!
//! Exposes the evaluator, the Earth comparison, the parameter catalogue and
//! the narrator over warp.

pub mod error;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use weatherlab_core::{NetworkError, ServerConfig, SimulationConfig};
use weatherlab_narrative::Narrator;

pub use error::ApiError;
pub use routes::{api, MAX_BODY_BYTES};

/// Shared, read-only state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub narrator: Arc<Narrator>,
    pub simulation: SimulationConfig,
}

impl AppState {
    pub fn new(narrator: Narrator, simulation: SimulationConfig) -> Self {
        Self {
            narrator: Arc::new(narrator),
            simulation,
        }
    }
}

/// Serve the API until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), NetworkError> {
    let address = config.bind_address();
    let addr: SocketAddr = address.parse().map_err(|e| NetworkError::BindFailed {
        addr: address.clone(),
        message: format!("{}", e),
    })?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
        tracing::info!("Shutdown signal received");
    };

    let (bound, server) = warp::serve(api(state))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .map_err(|e| NetworkError::BindFailed {
            addr: address.clone(),
            message: e.to_string(),
        })?;

    tracing::info!("WeatherLab API listening on http://{}", bound);
    server.await;
    tracing::info!("Server stopped");

    Ok(())
}
