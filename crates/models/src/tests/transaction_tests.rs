use crate::car;
use anyhow::Result;
use sea_orm::TransactionTrait;

use super::setup_test_db;

#[tokio::test]
async fn test_rollback_discards_insert() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let inside = car::insert(&txn, "AUDI", "A6", 2023, "green").await?;
    assert!(car::get(&txn, inside.id).await?.is_some());
    txn.rollback().await?;

    assert!(car::get(&db, inside.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_commit_keeps_insert() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let inside = car::insert(&txn, "BMW", "320", 2020, "black").await?;
    txn.commit().await?;

    assert_eq!(car::get(&db, inside.id).await?, Some(inside));
    Ok(())
}
