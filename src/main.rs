use std::sync::Arc;

use epicmoments_api::context::ApiContext;
use epicmoments_api::database::manager::DatabaseManager;
use epicmoments_api::share::store::PgGalleryStore;
use epicmoments_api::storage::StorageLinks;
use epicmoments_api::{app, config};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    let config = config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting EpicMoments API in {:?} mode", config.environment);

    let pool = DatabaseManager::pool()
        .unwrap_or_else(|e| panic!("failed to initialize database pool: {}", e));
    let links = StorageLinks::from_config()
        .unwrap_or_else(|e| panic!("failed to parse asset base URL: {}", e));

    let ctx = ApiContext::new(Arc::new(PgGalleryStore::new(pool)), links);
    let app = app(ctx);

    // Allow deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("EpicMoments API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
