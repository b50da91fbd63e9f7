use thiserror::Error;

use crate::car::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn car_not_found(id: i64) -> Self {
        Self::NotFound(format!("car with id {} not found", id))
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
