//! Acceptance rules applied once, when a car is created.
//!
//! Each predicate is total: an absent field counts as a failure and nothing
//! here ever errors or panics. Make, model and color compare case-insensitively.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use thiserror::Error;

use super::domain::{CarDraft, NewCar};

/// Oldest accepted model year.
pub const MIN_YEAR: i32 = 2020;

// Spellings are kept exactly as the business supplied them; correcting
// "VOLKSVAGEN" or "PROSCHE" would reject input that is accepted today.
static MAKE_MODELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("MERCEDES", "E220"),
        ("AUDI", "A6"),
        ("VOLKSVAGEN", "ARTEON"),
        ("BMW", "320"),
        ("FERRARI", "F40"),
        ("PROSCHE", "GT4"),
    ])
});

static COLORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["RED", "GREEN", "BLACK", "SILVER"]));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid make and model combination")]
    InvalidMakeModel,
    #[error("Invalid year: cars must be from 2020 or later")]
    InvalidYear,
    #[error("Invalid color: allowed colors are RED, GREEN, BLACK, SILVER")]
    InvalidColor,
}

/// Stateless checker over the fixed allow-lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarValidator;

impl CarValidator {
    pub fn make_model_disallowed(&self, car: &NewCar) -> bool {
        let (Some(make), Some(model)) = (car.make.as_deref(), car.model.as_deref()) else {
            return true;
        };
        match MAKE_MODELS.get(make.to_uppercase().as_str()) {
            Some(allowed) => model.to_uppercase() != *allowed,
            None => true,
        }
    }

    pub fn year_invalid(&self, car: &NewCar) -> bool {
        car.year.map_or(true, |year| year < MIN_YEAR)
    }

    pub fn color_invalid(&self, car: &NewCar) -> bool {
        car.color
            .as_deref()
            .map_or(true, |color| !COLORS.contains(color.to_uppercase().as_str()))
    }

    /// Runs make/model, year, color in that order and stops at the first failure.
    pub fn validate(&self, car: NewCar) -> Result<CarDraft, ValidationError> {
        if self.make_model_disallowed(&car) {
            return Err(ValidationError::InvalidMakeModel);
        }
        if self.year_invalid(&car) {
            return Err(ValidationError::InvalidYear);
        }
        if self.color_invalid(&car) {
            return Err(ValidationError::InvalidColor);
        }
        match car {
            NewCar { make: Some(make), model: Some(model), year: Some(year), color: Some(color) } => {
                Ok(CarDraft { make, model, year, color })
            }
            // The three checks above reject every absent field.
            _ => Err(ValidationError::InvalidMakeModel),
        }
    }
}
