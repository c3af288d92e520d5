//! Database layer for polls-rs.
//!
//! Owns the schema (entities and migrations), the repositories the services
//! talk to, and the connection pool lifecycle. There is no global connection:
//! callers build one with [`init`], share it through an `Arc`, and close it
//! when the server stops.

pub mod entities;
pub mod migrations;
pub mod repositories;
pub mod test_utils;

use polls_common::{AppError, Config};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::log::LevelFilter;

/// Initialize database connection.
pub async fn init(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database.url);

    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Run pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), AppError> {
    use sea_orm_migration::MigratorTrait;
    migrations::Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Close the connection pool, waiting for checked-out connections to return.
pub async fn close(db: DatabaseConnection) -> Result<(), AppError> {
    db.close()
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}
