//! Validation utilities for the Soil Fertility Advisor

use crate::types::Coordinate;

/// Validate a WGS84 coordinate pair
pub fn validate_coordinate(coordinate: &Coordinate) -> Result<(), &'static str> {
    if !coordinate.latitude.is_finite()
        || coordinate.latitude < -90.0
        || coordinate.latitude > 90.0
    {
        return Err("Latitude must be between -90 and 90");
    }
    if !coordinate.longitude.is_finite()
        || coordinate.longitude < -180.0
        || coordinate.longitude > 180.0
    {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}
