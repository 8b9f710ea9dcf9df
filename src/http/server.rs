//! HTTP server setup and request handlers.
//!
//! # Responsibilities
//! - Create Axum Router with the root and wait-times handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener, serve with graceful shutdown
//! - Reindex the upstream attraction list by attraction ID

use std::time::{Duration, Instant};

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::http::error::HandlerError;
use crate::observability::metrics;
use crate::upstream::{Attraction, WaitTimeClient, WaitTimeMap};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: WaitTimeClient,
}

/// HTTP server for the wait-time proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and upstream
    /// client.
    pub fn new(config: ProxyConfig, client: WaitTimeClient) -> Self {
        let state = AppState { client };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(root_handler))
            .route("/{park_id}/waittimes", get(wait_times_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
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
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Liveness endpoint.
async fn root_handler() -> &'static str {
    "Hello, World!"
}

/// Wait-times proxy handler.
/// Fetches the park's attraction list upstream and returns it keyed by
/// attraction ID.
async fn wait_times_handler(
    State(state): State<AppState>,
    Path(park_id): Path<String>,
) -> Result<Json<WaitTimeMap>, HandlerError> {
    let start_time = Instant::now();

    tracing::debug!(park_id = %park_id, "Proxying wait time request");

    let attractions = match state.client.fetch_wait_times(&park_id).await {
        Ok(attractions) => attractions,
        Err(e) => {
            metrics::record_request("waittimes", 500, start_time);
            return Err(HandlerError::from(e));
        }
    };

    metrics::record_request("waittimes", 200, start_time);
    Ok(Json(index_by_id(attractions)))
}

/// Reindex the upstream attraction list by ID. Later duplicates win.
pub fn index_by_id(attractions: Vec<Attraction>) -> WaitTimeMap {
    let mut map = WaitTimeMap::with_capacity(attractions.len());
    for attraction in attractions {
        map.insert(attraction.id.clone(), attraction);
    }
    map
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
