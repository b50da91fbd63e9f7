use async_trait::async_trait;

use super::domain::{Car, CarDraft};
use crate::errors::ServiceError;

/// Persistence abstraction for car records.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// All records, ascending id.
    async fn find_all(&self) -> Result<Vec<Car>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, ServiceError>;
    async fn find_by_year(&self, year: i32) -> Result<Vec<Car>, ServiceError>;
    /// Insert and return the record with its assigned id.
    async fn save(&self, draft: CarDraft) -> Result<Car, ServiceError>;
    /// `Ok(false)` when nothing was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Inner {
        cars: BTreeMap<i64, Car>, // key: id
        last_id: i64,
    }

    #[derive(Default)]
    pub struct MockCarRepository {
        inner: Mutex<Inner>,
        unavailable: bool,
    }

    impl MockCarRepository {
        /// A repository whose every call fails like a dropped database.
        pub fn unavailable() -> Self {
            Self { unavailable: true, ..Self::default() }
        }

        fn lock(&self) -> Result<MutexGuard<'_, Inner>, ServiceError> {
            if self.unavailable {
                return Err(ServiceError::Db("connection refused".into()));
            }
            self.inner
                .lock()
                .map_err(|_| ServiceError::Db("mock repository lock poisoned".into()))
        }
    }

    #[async_trait]
    impl CarRepository for MockCarRepository {
        async fn find_all(&self) -> Result<Vec<Car>, ServiceError> {
            Ok(self.lock()?.cars.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Car>, ServiceError> {
            Ok(self.lock()?.cars.get(&id).cloned())
        }

        async fn find_by_year(&self, year: i32) -> Result<Vec<Car>, ServiceError> {
            let inner = self.lock()?;
            Ok(inner.cars.values().filter(|c| c.year == year).cloned().collect())
        }

        async fn save(&self, draft: CarDraft) -> Result<Car, ServiceError> {
            let mut inner = self.lock()?;
            inner.last_id += 1;
            let car = Car {
                id: inner.last_id,
                make: draft.make,
                model: draft.model,
                year: draft.year,
                color: draft.color,
            };
            inner.cars.insert(car.id, car.clone());
            Ok(car)
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.cars.remove(&id).is_some())
        }
    }
}
