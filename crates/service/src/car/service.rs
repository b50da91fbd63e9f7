use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{Car, NewCar};
use super::repository::CarRepository;
use super::validation::CarValidator;
use crate::errors::ServiceError;

/// Application service for car records.
/// Validates candidates before they reach the repository and turns
/// missing rows into `ServiceError::NotFound` where the caller needs one.
pub struct CarService<R: CarRepository + ?Sized> {
    repo: Arc<R>,
    validator: CarValidator,
}

impl<R: CarRepository + ?Sized> CarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self::with_validator(repo, CarValidator) }

    pub fn with_validator(repo: Arc<R>, validator: CarValidator) -> Self { Self { repo, validator } }

    pub async fn list_all(&self) -> Result<Vec<Car>, ServiceError> { self.repo.find_all().await }

    /// `Ok(None)` when no record has that id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Car>, ServiceError> { self.repo.find_by_id(id).await }

    pub async fn list_by_year(&self, year: i32) -> Result<Vec<Car>, ServiceError> { self.repo.find_by_year(year).await }

    /// Validate and store a new car.
    ///
    /// # Examples
    /// ```
    /// use service::car::{CarService, NewCar, repository::mock::MockCarRepository};
    /// use std::sync::Arc;
    /// let svc = CarService::new(Arc::new(MockCarRepository::default()));
    /// let car = tokio_test::block_on(svc.create(NewCar::new("BMW", "320", 2021, "Black"))).unwrap();
    /// assert_eq!(car.id, 1);
    /// assert_eq!(car.color, "Black");
    /// let err = tokio_test::block_on(svc.create(NewCar::new("BMW", "M3", 2021, "Black"))).unwrap_err();
    /// assert!(matches!(err, service::errors::ServiceError::Validation(_)));
    /// ```
    #[instrument(skip(self, candidate))]
    pub async fn create(&self, candidate: NewCar) -> Result<Car, ServiceError> {
        let draft = self.validator.validate(candidate).map_err(|e| {
            warn!(reason = %e, "car_rejected");
            ServiceError::Validation(e)
        })?;
        let car = self.repo.save(draft).await?;
        info!(id = car.id, make = %car.make, model = %car.model, year = car.year, "car_created");
        Ok(car)
    }

    /// Delete by id. A row that disappears between the lookup and the delete
    /// is reported as not found, same as one that never existed.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::car_not_found(id));
        }
        if !self.repo.delete(id).await? {
            warn!(id, "car_vanished_before_delete");
            return Err(ServiceError::car_not_found(id));
        }
        info!(id, "car_deleted");
        Ok(())
    }
}
