//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/research` - Research stage (keywords, notes, candidate URLs)
//! - `/api/outline` - Outline stage
//! - `/api/write` - Writing stage (finished blog post)
//! - `/api/health` - Liveness check

pub mod health;
pub mod outline;
pub mod research;
pub mod write;

use crate::middleware::apply_cors;
use crate::models::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the main application router
///
/// All routes are prefixed with `/api/`. CORS is permissive and the trace
/// layer logs every request/response pair.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let api_router = Router::new()
        .merge(research::router(state.clone()))
        .merge(outline::router(state.clone()))
        .merge(write::router(state))
        .merge(health::router());

    apply_cors(api_router.layer(TraceLayer::new_for_http()))
}
