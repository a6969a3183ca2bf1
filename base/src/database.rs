use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Error while connecting to the database: {0}")]
    Database(#[from] DbErr),
}

pub async fn open_database(url: &str) -> Result<DatabaseConnection, DatabaseError> {
    tracing::trace! {%url, "Connecting to database"};
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8))
        .sqlx_logging(true);
    Database::connect(opt)
        .await
        .map_err(DatabaseError::Database)
}

/// Single-connection in-memory SQLite store. Every pooled connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn open_memory_database() -> Result<DatabaseConnection, DatabaseError> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(opt)
        .await
        .map_err(DatabaseError::Database)
}
