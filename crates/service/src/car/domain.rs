use serde::Deserialize;

/// A stored car record, id assigned by the store.
pub type Car = models::car::Model;

/// Create request body. Every field may be missing; a missing field fails
/// the check that reads it. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCar {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
}

impl NewCar {
    pub fn new(make: &str, model: &str, year: i32, color: &str) -> Self {
        Self {
            make: Some(make.to_string()),
            model: Some(model.to_string()),
            year: Some(year),
            color: Some(color.to_string()),
        }
    }
}

/// A candidate that passed validation, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDraft {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
}
