//! Pre-trained model artifact loading
//!
//! The fitted scaler and classifier are loaded once at startup and shared
//! read-only across requests; the adapter never re-fits them. Missing or
//! malformed artifacts are fatal.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use shared::{FertilityClassifier, StandardScaler};

use crate::config::ModelConfig;

/// The pre-fitted scaling transform and classifier, loaded together
#[derive(Debug, Clone)]
pub struct FertilityModel {
    pub scaler: StandardScaler,
    pub classifier: FertilityClassifier,
}

impl FertilityModel {
    /// Load both artifacts from the configured paths
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let scaler = load_artifact(&config.scaler_path)?;
        let classifier = load_artifact(&config.classifier_path)?;
        Ok(Self { scaler, classifier })
    }
}

/// Deserialize one JSON artifact; dimension checks run inside the
/// artifact types' deserializers.
fn load_artifact<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open model artifact {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse model artifact {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_an_error() {
        let result: Result<StandardScaler> = load_artifact("does/not/exist.json");
        assert!(result.is_err());
    }

    #[test]
    fn loads_valid_scaler_export() {
        let path = std::env::temp_dir().join("sfa_test_scaler.json");
        std::fs::write(
            &path,
            r#"{
                "mean": [2.0, 6.0, 40.0, 30.0, 15.0, 1.3, 25.0, 10.0],
                "scale": [1.0, 0.5, 10.0, 8.0, 5.0, 0.2, 9.0, 4.0]
            }"#,
        )
        .unwrap();

        let result: Result<StandardScaler> = load_artifact(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_ok());
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let path = std::env::temp_dir().join("sfa_test_bad_scaler.json");
        std::fs::write(&path, r#"{"mean": [0.0], "scale": [1.0]}"#).unwrap();

        let result: Result<StandardScaler> = load_artifact(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
