use crate::db::{connect_options, connect_with_config};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::Duration;
use anyhow::Result;

use super::memory_config;

#[test]
fn test_connect_options_follow_config() {
    let mut cfg = memory_config();
    cfg.acquire_timeout_secs = 7;
    cfg.sqlx_logging = true;
    let opts = connect_options(&cfg);
    assert_eq!(opts.get_url(), "sqlite::memory:");
    assert_eq!(opts.get_max_connections(), Some(1));
    assert_eq!(opts.get_min_connections(), Some(1));
    assert_eq!(opts.get_acquire_timeout(), Some(Duration::from_secs(7)));
    assert!(opts.get_sqlx_logging());
}

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_with_config(&memory_config()).await?;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}
