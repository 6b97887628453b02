//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create the Axum Router with the relay endpoint
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener with graceful shutdown
//! - Map relay errors to caller-facing status codes

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RelayConfig;
use crate::relay::{Envelope, Forwarder, RelayError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// HTTP server for the relay endpoint.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            forwarder: Arc::new(Forwarder::new()),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/reset-timer", post(reset_timer))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Relay handler.
/// Decodes the envelope, decodes the forward spec, and dispatches once.
async fn reset_timer(State(state): State<AppState>, body: Bytes) -> Response {
    let envelope = match Envelope::decode(&body) {
        Ok(envelope) => envelope,
        Err(e) => return error_response(e),
    };

    // id and time are accepted and logged, nothing more.
    tracing::info!(
        id = %envelope.id,
        time = envelope.time,
        "envelope received"
    );

    let spec = match envelope.forward_spec() {
        Ok(spec) => spec,
        Err(e) => return error_response(e),
    };

    tracing::debug!(
        method = %spec.method,
        url = %spec.url,
        "dispatching forward spec"
    );

    match state.forwarder.dispatch(&spec).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => error_response(e),
    }
}

/// Map a relay error to its caller-facing status and fixed message.
fn error_response(err: RelayError) -> Response {
    tracing::warn!(error = %err, "relay failed");
    (err.status(), Json(json!({ "error": err.public_message() }))).into_response()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
