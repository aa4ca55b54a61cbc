//! External API integrations

pub mod soilgrids;

pub use soilgrids::SoilGridsClient;
