//! HTTP API for the energy calculator
//!
//! # Routes
//!
//! - `GET /health` - Health check
//! - `POST /calculate` - Run an audit over a list of appliances

mod handlers;

pub use handlers::{ApiError, ErrorResponse, HealthResponse};

use crate::audit::Calculator;
use crate::core::{Config, ServerConfig};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Read-only state shared by all handlers
pub struct AppState {
    pub calculator: Calculator,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            calculator: Calculator::new(config),
        }
    }
}

/// Create the API router with all endpoints.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/calculate", post(handlers::calculate_handler))
        .with_state(state)
}

/// Start the HTTP server and serve until the process stops.
pub async fn start_server(state: Arc<AppState>, config: &ServerConfig) -> std::io::Result<()> {
    let app = create_router(state);

    log::info!("Starting energy audit API on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
