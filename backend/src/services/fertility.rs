//! Fertility assessment service
//!
//! Adapts normalized soil attributes to the pre-trained classifier:
//! assembles the fixed-order feature vector, applies the fitted scaler,
//! predicts the fertility class, and attaches the static advisory record.

use std::sync::Arc;

use serde::Serialize;
use shared::{fertility_record, SoilAttributeInput, SoilAttributes};

use crate::error::{AppError, AppResult};
use crate::model::FertilityModel;

/// Fertility assessment service
#[derive(Clone)]
pub struct FertilityService {
    model: Arc<FertilityModel>,
}

/// Classification result with advisory content
#[derive(Debug, Clone, Serialize)]
pub struct FertilityAssessment {
    pub prediction: u32,
    pub fertility_status: &'static str,
    pub recommended_crops: &'static [&'static str],
    pub insights: &'static [&'static str],
    pub soil_indicators: &'static [&'static str],
    pub management_practices: &'static [&'static str],
}

impl FertilityAssessment {
    /// Assessment view of a bare class index
    pub fn from_class(prediction: u32) -> Self {
        let record = fertility_record(prediction);
        Self {
            prediction,
            fertility_status: record.status,
            recommended_crops: record.crops,
            insights: record.insights,
            soil_indicators: record.soil_indicators,
            management_practices: record.management_practices,
        }
    }
}

impl FertilityService {
    /// Create a new FertilityService instance
    pub fn new(model: Arc<FertilityModel>) -> Self {
        Self { model }
    }

    /// Validate caller-supplied attributes.
    ///
    /// The classifier consumes all eight attributes, so completeness is
    /// enforced over the full feature set, not a subset.
    pub fn complete_input(&self, input: SoilAttributeInput) -> AppResult<SoilAttributes> {
        input
            .try_into_complete()
            .map_err(|missing| AppError::IncompleteInput {
                missing: missing.iter().map(|name| name.to_string()).collect(),
            })
    }

    /// Classify a complete attribute mapping.
    ///
    /// Deterministic: identical attributes yield identical feature vectors
    /// and identical classifications. A class index the record table does
    /// not recognize resolves to the "Unknown" record, not an error.
    pub fn assess(&self, attributes: &SoilAttributes) -> FertilityAssessment {
        let features = attributes.feature_vector();
        let scaled = self.model.scaler.transform(&features);
        let prediction = self.model.classifier.predict(&scaled);
        FertilityAssessment::from_class(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::{FertilityClassifier, StandardScaler};

    /// Identity scaler plus a classifier whose score grows with nitrogen:
    /// class 0 below ~0.75 g/kg, class 1 up to ~2.75 g/kg, class 2 above.
    fn substitute_model() -> Arc<FertilityModel> {
        let scaler: StandardScaler = serde_json::from_value(json!({
            "mean": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            "scale": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]
        }))
        .unwrap();

        let classifier: FertilityClassifier = serde_json::from_value(json!({
            "classes": [0, 1, 2],
            "coefficients": [
                [-2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
            ],
            "intercepts": [4.0, 2.5, -3.0]
        }))
        .unwrap();

        Arc::new(FertilityModel { scaler, classifier })
    }

    fn attributes(nitrogen: f64) -> SoilAttributes {
        SoilAttributes {
            nitrogen,
            ph: 6.5,
            sand: 40.0,
            silt: 30.0,
            cec: 20.0,
            bulk_density: 1.3,
            clay: 30.0,
            organic_carbon: 12.0,
        }
    }

    #[test]
    fn assessment_carries_the_record_for_the_predicted_class() {
        let service = FertilityService::new(substitute_model());

        let low = service.assess(&attributes(0.0));
        assert_eq!(low.prediction, 0);
        assert_eq!(low.fertility_status, "Low fertility");
        assert!(!low.recommended_crops.is_empty());

        let high = service.assess(&attributes(10.0));
        assert_eq!(high.prediction, 2);
        assert_eq!(high.fertility_status, "Highly fertile soils");
    }

    #[test]
    fn identical_input_classifies_identically() {
        let service = FertilityService::new(substitute_model());
        let input = attributes(2.0);
        let first = service.assess(&input);
        let second = service.assess(&input);
        assert_eq!(first.prediction, second.prediction);
        assert_eq!(first.fertility_status, second.fertility_status);
    }

    #[test]
    fn unmapped_class_index_resolves_to_unknown_record() {
        // A classifier trained with class labels outside the record table.
        let scaler: StandardScaler = serde_json::from_value(json!({
            "mean": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            "scale": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]
        }))
        .unwrap();
        let classifier: FertilityClassifier = serde_json::from_value(json!({
            "classes": [7],
            "coefficients": [[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]],
            "intercepts": [0.0]
        }))
        .unwrap();

        let service = FertilityService::new(Arc::new(FertilityModel { scaler, classifier }));
        let assessment = service.assess(&attributes(1.0));
        assert_eq!(assessment.prediction, 7);
        assert_eq!(assessment.fertility_status, "Unknown");
        assert!(assessment.recommended_crops.is_empty());
    }

    #[test]
    fn incomplete_bypass_input_is_rejected_with_missing_fields() {
        let service = FertilityService::new(substitute_model());
        let input = SoilAttributeInput {
            nitrogen: Some(4.0),
            ph: Some(6.5),
            ..Default::default()
        };

        match service.complete_input(input) {
            Err(AppError::IncompleteInput { missing }) => {
                assert_eq!(
                    missing,
                    vec!["sand", "silt", "cec", "bulk_density", "clay", "organic_carbon"]
                );
            }
            other => panic!("expected IncompleteInput, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn complete_bypass_input_is_used_as_is() {
        let service = FertilityService::new(substitute_model());
        let input = SoilAttributeInput {
            nitrogen: Some(40.0), // already in natural units, no de-scaling
            ph: Some(6.5),
            sand: Some(40.0),
            silt: Some(30.0),
            cec: Some(20.0),
            bulk_density: Some(1.3),
            clay: Some(30.0),
            organic_carbon: Some(12.0),
        };

        let attributes = service.complete_input(input).unwrap();
        assert_eq!(attributes.nitrogen, 40.0);
    }
}
