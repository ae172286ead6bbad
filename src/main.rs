//! TrafficTelligence Backend API
//!
//! Traffic volume estimation service for a fictitious road network. Every
//! response is computed on the fly from heuristic formulas plus random
//! variation; there is no model training and no storage.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                TRAFFICTELLIGENCE BACKEND                 │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌────────────────┐  ┌───────────────┐   │
//! │  │  API      │   │  Volume        │  │  History      │   │
//! │  │  Routes   │──▶│  Estimator     │  │  Synthesizer  │   │
//! │  │  (Axum)   │   │  (heuristics)  │  │  + Analytics  │   │
//! │  └───────────┘   └────────────────┘  └───────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod engine;
mod error;
mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use engine::{FeatureWeights, VolumeEstimator};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let default_filter = if config.is_production() {
        "traffictelligence_backend=info,tower_http=info"
    } else {
        "traffictelligence_backend=debug,tower_http=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("TrafficTelligence Backend API starting...");
    tracing::info!("Environment: {}", config.environment);

    // Build application state
    let state = AppState {
        estimator: VolumeEstimator::new(FeatureWeights::default()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub estimator: VolumeEstimator,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::check))
        .route("/api/traffic-data", get(handlers::traffic_data::get))
        .route("/api/predictions", post(handlers::predictions::create))
        .route("/api/analytics", get(handlers::analytics::get))
        .route("/api/model/retrain", post(handlers::model::retrain))
        .route("/api/alerts", get(handlers::alerts::list))
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================
