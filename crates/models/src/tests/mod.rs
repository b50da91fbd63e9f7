use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_with_config;

/// Database connection and configuration tests
pub mod db_tests;

/// CRUD operations tests for the car entity
pub mod crud_tests;

/// Transaction handling tests
pub mod transaction_tests;

/// Single-connection pool: every SQLite `:memory:` connection is its own database.
pub(crate) fn memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    }
}

/// Setup test database with migrations
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
