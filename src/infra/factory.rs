use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    sqlite_user_repo::SqliteUserRepo, sqlite_ingredient_repo::SqliteIngredientRepo,
    sqlite_product_repo::SqliteProductRepo, sqlite_order_repo::SqliteOrderRepo,
    sqlite_movement_repo::SqliteMovementRepo,
};

pub async fn connect_sqlite(database_url: &str) -> SqlitePool {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_sqlite_migrations(&pool).await;
    pool
}

pub fn build_state(config: &Config, pool: SqlitePool) -> AppState {
    AppState {
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        ingredient_repo: Arc::new(SqliteIngredientRepo::new(pool.clone())),
        product_repo: Arc::new(SqliteProductRepo::new(pool.clone())),
        order_repo: Arc::new(SqliteOrderRepo::new(pool.clone())),
        movement_repo: Arc::new(SqliteMovementRepo::new(pool)),
        auth_service: Arc::new(AuthService::new(config)),
    }
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let pool = connect_sqlite(&config.database_url).await;
    build_state(config, pool)
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
