use axum::{Router, extract::DefaultBodyLimit};
use sqlx::SqlitePool;

use crate::{
    config::{AppConfig, ServerConfig},
    database,
    error::Result,
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let state = AppState { db: pool };

    Ok(router(state, &config.server))
}

/// Wires the routes to an already opened database.
pub fn router(state: AppState, server: &ServerConfig) -> Router {
    routes::create_router()
        .layer(DefaultBodyLimit::max(server.max_body_size))
        .with_state(state)
}
