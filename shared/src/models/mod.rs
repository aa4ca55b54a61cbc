//! Domain models for the Soil Fertility Advisor

mod classifier;
mod fertility;
mod soil;
mod user;

pub use classifier::*;
pub use fertility::*;
pub use soil::*;
pub use user::*;
