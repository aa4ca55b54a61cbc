//! Pre-fitted model artifact types
//!
//! The scaler and classifier deserialize from JSON exports of the trained
//! artifacts. Both validate their dimensions against the feature contract
//! during deserialization, so a loaded artifact can be applied without
//! further checks, and both are read-only for the life of the process.

use serde::Deserialize;
use thiserror::Error;

use crate::models::soil::FEATURE_COUNT;

/// Artifact shape problems detected at load time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("expected {expected} features, artifact has {found}")]
    FeatureCountMismatch { expected: usize, found: usize },

    #[error("scale factors must be finite and non-zero")]
    DegenerateScale,

    #[error("classifier must define at least one class")]
    NoClasses,

    #[error("classes, coefficients and intercepts must have equal length")]
    ClassCountMismatch,
}

/// Pre-fitted per-feature centering and scaling transform
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "ScalerParams")]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

#[derive(Debug, Deserialize)]
struct ScalerParams {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl TryFrom<ScalerParams> for StandardScaler {
    type Error = ArtifactError;

    fn try_from(params: ScalerParams) -> Result<Self, Self::Error> {
        let mean: [f64; FEATURE_COUNT] =
            params
                .mean
                .try_into()
                .map_err(|values: Vec<f64>| ArtifactError::FeatureCountMismatch {
                    expected: FEATURE_COUNT,
                    found: values.len(),
                })?;
        let scale: [f64; FEATURE_COUNT] =
            params
                .scale
                .try_into()
                .map_err(|values: Vec<f64>| ArtifactError::FeatureCountMismatch {
                    expected: FEATURE_COUNT,
                    found: values.len(),
                })?;

        if scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(ArtifactError::DegenerateScale);
        }

        Ok(Self { mean, scale })
    }
}

impl StandardScaler {
    /// Apply the fitted transform: `(x - mean) / scale` per feature
    pub fn transform(&self, features: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            scaled[i] = (features[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}

/// Pre-fitted linear classifier over scaled soil features.
///
/// One coefficient row and intercept per class; prediction is the class
/// with the highest decision score, first maximum winning ties.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "ClassifierParams")]
pub struct FertilityClassifier {
    classes: Vec<u32>,
    coefficients: Vec<[f64; FEATURE_COUNT]>,
    intercepts: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ClassifierParams {
    classes: Vec<u32>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl TryFrom<ClassifierParams> for FertilityClassifier {
    type Error = ArtifactError;

    fn try_from(params: ClassifierParams) -> Result<Self, Self::Error> {
        if params.classes.is_empty() {
            return Err(ArtifactError::NoClasses);
        }
        if params.coefficients.len() != params.classes.len()
            || params.intercepts.len() != params.classes.len()
        {
            return Err(ArtifactError::ClassCountMismatch);
        }

        let coefficients = params
            .coefficients
            .into_iter()
            .map(|row| {
                row.try_into()
                    .map_err(|values: Vec<f64>| ArtifactError::FeatureCountMismatch {
                        expected: FEATURE_COUNT,
                        found: values.len(),
                    })
            })
            .collect::<Result<Vec<[f64; FEATURE_COUNT]>, ArtifactError>>()?;

        Ok(Self {
            classes: params.classes,
            coefficients,
            intercepts: params.intercepts,
        })
    }
}

impl FertilityClassifier {
    /// Predict the class index for a scaled feature vector
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> u32 {
        let mut best = 0usize;
        let mut best_score = f64::NEG_INFINITY;

        for (index, (row, intercept)) in
            self.coefficients.iter().zip(&self.intercepts).enumerate()
        {
            let score: f64 = row
                .iter()
                .zip(features)
                .map(|(weight, value)| weight * value)
                .sum::<f64>()
                + intercept;
            if score > best_score {
                best_score = score;
                best = index;
            }
        }

        self.classes[best]
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> StandardScaler {
        StandardScaler::try_from(ScalerParams {
            mean: mean.to_vec(),
            scale: scale.to_vec(),
        })
        .unwrap()
    }

    #[test]
    fn scaler_centers_and_scales() {
        let scaler = scaler([1.0; FEATURE_COUNT], [2.0; FEATURE_COUNT]);
        let scaled = scaler.transform(&[5.0; FEATURE_COUNT]);
        assert_eq!(scaled, [2.0; FEATURE_COUNT]);
    }

    #[test]
    fn scaler_rejects_wrong_feature_count() {
        let result = StandardScaler::try_from(ScalerParams {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        });
        assert_eq!(
            result.unwrap_err(),
            ArtifactError::FeatureCountMismatch {
                expected: FEATURE_COUNT,
                found: 3
            }
        );
    }

    #[test]
    fn scaler_rejects_zero_scale() {
        let mut scale = [1.0; FEATURE_COUNT];
        scale[4] = 0.0;
        let result = StandardScaler::try_from(ScalerParams {
            mean: vec![0.0; FEATURE_COUNT],
            scale: scale.to_vec(),
        });
        assert_eq!(result.unwrap_err(), ArtifactError::DegenerateScale);
    }

    #[test]
    fn scaler_parses_from_json_export() {
        let json = r#"{
            "mean": [2.0, 6.0, 40.0, 30.0, 15.0, 1.3, 25.0, 10.0],
            "scale": [1.0, 0.5, 10.0, 8.0, 5.0, 0.2, 9.0, 4.0]
        }"#;
        let scaler: StandardScaler = serde_json::from_str(json).unwrap();
        let scaled = scaler.transform(&[2.0, 6.0, 40.0, 30.0, 15.0, 1.3, 25.0, 10.0]);
        assert_eq!(scaled, [0.0; FEATURE_COUNT]);
    }

    fn three_class_classifier() -> FertilityClassifier {
        // Class score is driven by the nitrogen slot only.
        FertilityClassifier::try_from(ClassifierParams {
            classes: vec![0, 1, 2],
            coefficients: vec![
                vec![-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                vec![0.0; FEATURE_COUNT],
                vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            ],
            intercepts: vec![0.0, 0.0, 0.0],
        })
        .unwrap()
    }

    #[test]
    fn predict_picks_highest_decision_score() {
        let classifier = three_class_classifier();
        let mut features = [0.0; FEATURE_COUNT];
        features[0] = 3.0;
        assert_eq!(classifier.predict(&features), 2);
        features[0] = -3.0;
        assert_eq!(classifier.predict(&features), 0);
    }

    #[test]
    fn predict_breaks_ties_toward_first_class() {
        let classifier = three_class_classifier();
        // All three scores are zero at the origin.
        assert_eq!(classifier.predict(&[0.0; FEATURE_COUNT]), 0);
    }

    #[test]
    fn predict_is_deterministic() {
        let classifier = three_class_classifier();
        let features = [0.4, 6.1, 33.0, 21.0, 14.0, 1.2, 28.0, 9.0];
        assert_eq!(classifier.predict(&features), classifier.predict(&features));
    }

    #[test]
    fn classifier_rejects_mismatched_class_counts() {
        let result = FertilityClassifier::try_from(ClassifierParams {
            classes: vec![0, 1],
            coefficients: vec![vec![0.0; FEATURE_COUNT]],
            intercepts: vec![0.0],
        });
        assert_eq!(result.unwrap_err(), ArtifactError::ClassCountMismatch);
    }

    #[test]
    fn classifier_rejects_empty_artifact() {
        let result = FertilityClassifier::try_from(ClassifierParams {
            classes: vec![],
            coefficients: vec![],
            intercepts: vec![],
        });
        assert_eq!(result.unwrap_err(), ArtifactError::NoClasses);
    }

    #[test]
    fn classifier_rejects_short_coefficient_row() {
        let result = FertilityClassifier::try_from(ClassifierParams {
            classes: vec![0],
            coefficients: vec![vec![0.0; 5]],
            intercepts: vec![0.0],
        });
        assert_eq!(
            result.unwrap_err(),
            ArtifactError::FeatureCountMismatch {
                expected: FEATURE_COUNT,
                found: 5
            }
        );
    }
}
