//! Test utilities for spinning up the full router over an in-memory database
//!
//! `TestContext` builds the same router `main` assembles, backed by an
//! in-memory SQLite database with migrations applied, so tests exercise
//! the real HTTP surface with `tower::ServiceExt::oneshot`.

use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{
    config::Config,
    db::Database,
    models::{Address, CreateAddress},
    AppState,
};

pub struct TestContext {
    pub app: Router,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub async fn new() -> Self {
        // A single connection keeps every query on the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory sqlite database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let db = Database { pool };
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            server_address: "127.0.0.1:0".to_string(),
        };

        let state = Arc::new(AppState { db, config });

        let app = Router::new()
            .route("/api/health", get(crate::health_check))
            .nest("/api/addresses", crate::routes::addresses::router())
            .layer(CorsLayer::permissive())
            .with_state(state.clone());

        Self { app, state }
    }

    /// Insert a row directly through the db layer, bypassing the HTTP surface
    pub async fn seed_address(
        &self,
        house_id: i64,
        street: &str,
        city: &str,
        postal_code: &str,
        country: &str,
        notes: Option<&str>,
    ) -> Address {
        self.state
            .db
            .create_address(CreateAddress {
                house_id,
                street: street.to_string(),
                city: city.to_string(),
                postal_code: postal_code.to_string(),
                country: country.to_string(),
                notes: notes.map(|n| n.to_string()),
            })
            .await
            .expect("Failed to seed address")
    }
}
