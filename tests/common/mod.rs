#![allow(dead_code)]

use product_service::{
    AppConfig, AppState,
    app,
    database,
};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const SCHEMA: &str = include_str!("../../schema.sql");

pub struct TestServer {
    pub base_url: String,
    pub pool: SqlitePool,
    handle: tokio::task::JoinHandle<()>,
    _dir: TempDir,
}

impl TestServer {
    /// Serves the production router over a fresh database file with the
    /// products table in place.
    pub async fn spawn() -> Self {
        Self::spawn_with_schema(true).await
    }

    /// Same as `spawn`, but the products table is never created.
    pub async fn spawn_without_schema() -> Self {
        Self::spawn_with_schema(false).await
    }

    async fn spawn_with_schema(with_schema: bool) -> Self {
        let (dir, config) = temp_config();

        let pool = database::create_pool(&config.database)
            .await
            .expect("failed to open test database");

        if with_schema {
            sqlx::query(SCHEMA)
                .execute(&pool)
                .await
                .expect("failed to create products table");
        }

        let router = app::router(AppState { db: pool.clone() }, &config.server);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url,
            pool,
            handle,
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A config whose database lives in a throwaway directory.
pub fn temp_config() -> (TempDir, AppConfig) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_url = format!("sqlite://{}", dir.path().join("products.sqlite").display());

    let config = AppConfig::from_lookup(|key| match key {
        "DB_URL" => Some(db_url.clone()),
        _ => None,
    })
    .expect("test config must parse");

    (dir, config)
}

/// A fresh pool with the products table created.
pub async fn test_pool() -> (TempDir, SqlitePool) {
    let (dir, config) = temp_config();

    let pool = database::create_pool(&config.database)
        .await
        .expect("failed to open test database");
    sqlx::query(SCHEMA)
        .execute(&pool)
        .await
        .expect("failed to create products table");

    (dir, pool)
}
