//! Business logic services for the Soil Fertility Advisor

pub mod auth;
pub mod fertility;

pub use auth::AuthService;
pub use fertility::FertilityService;
