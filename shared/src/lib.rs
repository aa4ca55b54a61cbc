//! Shared types and models for the Soil Fertility Advisor
//!
//! This crate contains the domain types shared between the backend server
//! and its test suites: the normalized soil attribute mapping, the
//! classifier feature contract, the pre-fitted model artifact types, and
//! the static fertility recommendation records.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
