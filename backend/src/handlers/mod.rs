//! HTTP request handlers

pub mod auth;
pub mod fertility;
pub mod health;
pub mod soil;

pub use auth::*;
pub use fertility::*;
pub use health::*;
pub use soil::*;
