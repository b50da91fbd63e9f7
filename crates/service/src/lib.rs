//! Service layer for car records.
//! - `car::validation` holds the fixed acceptance rules.
//! - `car::service::CarService` runs the rules and talks to a `CarRepository`.
//! - Repositories: SeaORM-backed for deployment, in-memory for tests.

pub mod errors;
pub mod car;
#[cfg(test)]
pub mod test_support;
