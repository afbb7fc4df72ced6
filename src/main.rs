use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use domus::{config::Config, db::Database, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = Database::new(&config.database_url).await?;

    info!("Running sqlx migrations...");
    sqlx::migrate!("./migrations").run(db.get_pool()).await?;

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
    });

    let app = Router::new()
        .route("/api/health", get(domus::health_check))
        .nest("/api/addresses", domus::routes::addresses::router())
        .merge(domus::swagger::create_swagger_router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
