//! HTTP handlers for fertility assessment endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{validate_coordinate, Coordinate, SoilAttributeInput, SoilAttributes};

use crate::error::{AppError, AppResult};
use crate::services::fertility::{FertilityAssessment, FertilityService};
use crate::AppState;

/// Request body for a fertility prediction
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// When present, the provider lookup is skipped and these values are
    /// used as-is, without de-scaling.
    pub attributes: Option<SoilAttributeInput>,
}

/// Prediction response, including the soil data that fed the classifier
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub assessment: FertilityAssessment,
    pub soil_data: SoilAttributes,
}

/// Predict soil fertility for a coordinate
pub async fn predict(
    State(state): State<AppState>,
    Json(body): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    let coordinate = Coordinate::new(body.latitude, body.longitude);
    validate_coordinate(&coordinate).map_err(|message| AppError::Validation {
        field: "coordinate".to_string(),
        message: message.to_string(),
    })?;

    let service = FertilityService::new(state.model.clone());

    let attributes = match body.attributes {
        Some(input) => service.complete_input(input)?,
        None => state.soilgrids.fetch_properties(&coordinate).await?,
    };

    let assessment = service.assess(&attributes);

    Ok(Json(PredictResponse {
        assessment,
        soil_data: attributes,
    }))
}

/// Static advisory record for a fertility class index
pub async fn get_class_record(Path(index): Path<u32>) -> Json<FertilityAssessment> {
    Json(FertilityAssessment::from_class(index))
}
