//! Car records: domain types, validation rules, persistence and the
//! service tying them together.

pub mod domain;
pub mod validation;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Car, CarDraft, NewCar};
pub use service::CarService;
