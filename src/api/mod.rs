//! REST surface over [`Fleet`].

pub mod assignments;
pub mod drivers;
pub mod error;
pub mod trucks;

use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::dispatch::Fleet;

pub use error::ApiError;

pub const SERVICE_NAME: &str = "truck-driver-management";

#[derive(Clone)]
pub struct AppState {
    pub fleet: Arc<RwLock<Fleet>>,
}

impl AppState {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet: Arc::new(RwLock::new(fleet)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

#[derive(Serialize)]
struct IndexResponse {
    message: &'static str,
    version: &'static str,
}

/// All routes, without CORS or tracing layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(drivers::routes())
        .merge(trucks::routes())
        .merge(assignments::routes())
        .fallback(fallback_handler)
        .with_state(state)
}

/// The router as served: routes plus CORS and request tracing.
pub fn app(config: &ServerConfig, state: AppState) -> Router {
    router(state)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serve until `shutdown` is cancelled, then drain in-flight requests.
pub async fn run_server(
    config: ServerConfig,
    state: AppState,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "Starting API server");

    axum::serve(listener, app(&config, state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Truck & Driver Management API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

async fn fallback_handler() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found")
}
