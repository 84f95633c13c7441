//! Error handling for the Setrace engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
