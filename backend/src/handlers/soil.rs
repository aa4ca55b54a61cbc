//! HTTP handlers for soil data endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{validate_coordinate, Coordinate, SoilAttributes};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for a soil property lookup
#[derive(Debug, Deserialize)]
pub struct SoilQuery {
    pub latitude: f64,
    pub longitude: f64,
}

/// Fetch normalized topsoil properties for a coordinate
pub async fn query_soil_data(
    State(state): State<AppState>,
    Query(query): Query<SoilQuery>,
) -> AppResult<Json<SoilAttributes>> {
    let coordinate = Coordinate::new(query.latitude, query.longitude);
    validate_coordinate(&coordinate).map_err(|message| AppError::Validation {
        field: "coordinate".to_string(),
        message: message.to_string(),
    })?;

    let attributes = state.soilgrids.fetch_properties(&coordinate).await?;
    Ok(Json(attributes))
}
