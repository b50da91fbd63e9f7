use sea_orm::DatabaseConnection;

use crate::car::domain::{Car, CarDraft};
use crate::car::repository::CarRepository;
use crate::errors::ServiceError;
use models::car;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCarRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCarRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CarRepository for SeaOrmCarRepository {
    async fn find_all(&self) -> Result<Vec<Car>, ServiceError> {
        Ok(car::list(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, ServiceError> {
        Ok(car::get(&self.db, id).await?)
    }

    async fn find_by_year(&self, year: i32) -> Result<Vec<Car>, ServiceError> {
        Ok(car::list_by_year(&self.db, year).await?)
    }

    async fn save(&self, draft: CarDraft) -> Result<Car, ServiceError> {
        Ok(car::insert(&self.db, &draft.make, &draft.model, draft.year, &draft.color).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(car::delete(&self.db, id).await?)
    }
}
