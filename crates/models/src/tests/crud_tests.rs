use crate::car;
use anyhow::Result;

use super::setup_test_db;

/// Test car CRUD operations
#[tokio::test]
async fn test_car_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    // Create
    let created = car::insert(&db, "BMW", "320", 2021, "Black").await?;
    assert!(created.id > 0);
    assert_eq!(created.make, "BMW");
    assert_eq!(created.color, "Black");

    // Read
    let found = car::get(&db, created.id).await?.expect("car present");
    assert_eq!(found, created);

    // Delete
    assert!(car::delete(&db, created.id).await?);
    assert!(car::get(&db, created.id).await?.is_none());
    assert!(!car::delete(&db, created.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_list_orders_by_id_and_filters_by_year() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let a = car::insert(&db, "AUDI", "A6", 2022, "red").await?;
    let b = car::insert(&db, "FERRARI", "F40", 2021, "RED").await?;
    let c = car::insert(&db, "MERCEDES", "E220", 2022, "silver").await?;

    let all: Vec<i64> = car::list(&db).await?.into_iter().map(|m| m.id).collect();
    assert_eq!(all, vec![a.id, b.id, c.id]);

    let y2022: Vec<i64> = car::list_by_year(&db, 2022).await?.into_iter().map(|m| m.id).collect();
    assert_eq!(y2022, vec![a.id, c.id]);

    assert!(car::list_by_year(&db, 1999).await?.is_empty());
    Ok(())
}
