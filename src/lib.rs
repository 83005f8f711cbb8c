use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod context;
pub mod database;
pub mod error;
pub mod handlers;
pub mod share;
pub mod storage;
pub mod testing;

use context::ApiContext;

pub fn app(ctx: ApiContext) -> Router {
    let api_config = &config::config().api;

    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Shared album surface
        .route("/album/:token", get(handlers::public::album::album_get))
        .route("/api/download", post(handlers::public::download::download_post))
        // Public marketing/shop surface
        .route("/api/portfolio", get(handlers::public::catalog::portfolio_get))
        .route("/api/shop/products", get(handlers::public::catalog::products_get))
        .with_state(ctx)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            api_config.request_timeout_secs,
        )));

    if api_config.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "EpicMoments API",
            "version": version,
            "description": "Gallery backend for sports photography studios",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "album": "/album/:token (public - share-token gated)",
                "download": "/api/download (public - share-token gated)",
                "portfolio": "/api/portfolio?tenant=:slug (public)",
                "shop": "/api/shop/products?tenant=:slug (public)",
            }
        }
    }))
}

async fn health(State(ctx): State<ApiContext>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match ctx.store.ping().await {
        Ok(()) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
