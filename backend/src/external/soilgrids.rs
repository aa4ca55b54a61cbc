//! SoilGrids API client for fetching topsoil property data
//!
//! Integrates with the ISRIC SoilGrids v2.0 properties service and
//! normalizes its depth-stratified response into the fixed attribute
//! mapping the classifier consumes.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::{Coordinate, SoilAttributes, SoilFeature};

use crate::error::{AppError, AppResult};

/// Depth band the classifier was trained on
const TOPSOIL_LABEL: &str = "0-5cm";

/// The provider encodes property means as fixed-point values scaled by 10
const MEAN_DIVISOR: f64 = 10.0;

/// SoilGrids API client
#[derive(Clone)]
pub struct SoilGridsClient {
    client: Client,
    base_url: String,
}

/// SoilGrids properties/query response
#[derive(Debug, Deserialize)]
struct QueryResponse {
    properties: PropertySet,
}

#[derive(Debug, Deserialize)]
struct PropertySet {
    layers: Vec<SoilLayer>,
}

#[derive(Debug, Deserialize)]
struct SoilLayer {
    name: String,
    #[serde(default)]
    depths: Vec<DepthBand>,
}

#[derive(Debug, Deserialize)]
struct DepthBand {
    label: String,
    values: Option<DepthValues>,
}

#[derive(Debug, Deserialize)]
struct DepthValues {
    mean: Option<f64>,
}

/// Provider-side name for each requested attribute
fn provider_property(feature: SoilFeature) -> &'static str {
    match feature {
        SoilFeature::Nitrogen => "nitrogen",
        SoilFeature::Ph => "phh2o",
        SoilFeature::Sand => "sand",
        SoilFeature::Silt => "silt",
        SoilFeature::Cec => "cec",
        SoilFeature::BulkDensity => "bdod",
        SoilFeature::Clay => "clay",
        SoilFeature::OrganicCarbon => "soc",
    }
}

/// Comma-separated property list for the query URL
fn requested_properties() -> String {
    SoilFeature::ORDER.map(provider_property).join(",")
}

impl SoilGridsClient {
    /// Create a new SoilGridsClient with a bounded request timeout
    pub fn new(base_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Fetch and normalize topsoil properties for a coordinate.
    ///
    /// Always yields the full attribute set: a property the provider did
    /// not report, a missing topsoil band, and a null mean all normalize
    /// to 0.0.
    pub async fn fetch_properties(&self, coordinate: &Coordinate) -> AppResult<SoilAttributes> {
        let url = format!(
            "{}/properties/query?lon={}&lat={}&properties={}",
            self.base_url,
            coordinate.longitude,
            coordinate.latitude,
            requested_properties()
        );

        let response = self.get_with_retry(&url).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ProviderUnavailable(format!(
                "{} - {}",
                status, body
            )));
        }

        let data: QueryResponse = response
            .json()
            .await
            .map_err(|e| AppError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(normalize_layers(&data.properties.layers))
    }

    /// Issue the GET, retrying once on transient transport failure.
    /// HTTP error statuses are not retried.
    async fn get_with_retry(&self, url: &str) -> AppResult<reqwest::Response> {
        match self.client.get(url).send().await {
            Ok(response) => Ok(response),
            Err(first) => {
                tracing::warn!("SoilGrids request failed, retrying once: {}", first);
                self.client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| AppError::ProviderUnavailable(format!("Request failed: {}", e)))
            }
        }
    }
}

/// Normalize provider layers into the fixed attribute mapping
fn normalize_layers(layers: &[SoilLayer]) -> SoilAttributes {
    let value = |feature: SoilFeature| {
        topsoil_mean(layers, provider_property(feature))
            .map(|mean| mean / MEAN_DIVISOR)
            .unwrap_or(0.0)
    };

    SoilAttributes {
        nitrogen: value(SoilFeature::Nitrogen),
        ph: value(SoilFeature::Ph),
        sand: value(SoilFeature::Sand),
        silt: value(SoilFeature::Silt),
        cec: value(SoilFeature::Cec),
        bulk_density: value(SoilFeature::BulkDensity),
        clay: value(SoilFeature::Clay),
        organic_carbon: value(SoilFeature::OrganicCarbon),
    }
}

/// Mean statistic of the topsoil band for a property, if reported
fn topsoil_mean(layers: &[SoilLayer], property: &str) -> Option<f64> {
    layers
        .iter()
        .find(|layer| layer.name == property)
        .and_then(|layer| layer.depths.iter().find(|d| d.label == TOPSOIL_LABEL))
        .and_then(|depth| depth.values.as_ref())
        .and_then(|values| values.mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FEATURE_COUNT;

    fn parse_layers(json: &str) -> Vec<SoilLayer> {
        let data: QueryResponse = serde_json::from_str(json).unwrap();
        data.properties.layers
    }

    #[test]
    fn requested_property_list_covers_feature_contract() {
        let properties = requested_properties();
        assert_eq!(properties.split(',').count(), FEATURE_COUNT);
        assert_eq!(
            properties,
            "nitrogen,phh2o,sand,silt,cec,bdod,clay,soc"
        );
    }

    #[test]
    fn selects_topsoil_band_over_deeper_bands() {
        let layers = parse_layers(
            r#"{
                "properties": {
                    "layers": [
                        {
                            "name": "nitrogen",
                            "depths": [
                                {"label": "0-5cm", "values": {"mean": 50}},
                                {"label": "5-15cm", "values": {"mean": 80}}
                            ]
                        }
                    ]
                }
            }"#,
        );
        assert_eq!(normalize_layers(&layers).nitrogen, 5.0);
    }

    #[test]
    fn de_scales_means_by_ten() {
        let layers = parse_layers(
            r#"{
                "properties": {
                    "layers": [
                        {
                            "name": "phh2o",
                            "depths": [{"label": "0-5cm", "values": {"mean": 65.0}}]
                        }
                    ]
                }
            }"#,
        );
        assert_eq!(normalize_layers(&layers).ph, 6.5);
    }

    #[test]
    fn missing_topsoil_band_defaults_to_zero() {
        let layers = parse_layers(
            r#"{
                "properties": {
                    "layers": [
                        {
                            "name": "sand",
                            "depths": [{"label": "5-15cm", "values": {"mean": 300}}]
                        }
                    ]
                }
            }"#,
        );
        assert_eq!(normalize_layers(&layers).sand, 0.0);
    }

    #[test]
    fn null_mean_defaults_to_zero() {
        let layers = parse_layers(
            r#"{
                "properties": {
                    "layers": [
                        {
                            "name": "clay",
                            "depths": [{"label": "0-5cm", "values": {"mean": null}}]
                        }
                    ]
                }
            }"#,
        );
        assert_eq!(normalize_layers(&layers).clay, 0.0);
    }

    #[test]
    fn missing_values_object_defaults_to_zero() {
        let layers = parse_layers(
            r#"{
                "properties": {
                    "layers": [
                        {"name": "cec", "depths": [{"label": "0-5cm"}]}
                    ]
                }
            }"#,
        );
        assert_eq!(normalize_layers(&layers).cec, 0.0);
    }

    #[test]
    fn mostly_absent_payload_still_yields_full_mapping() {
        // Provider reports only nitrogen; every other attribute defaults
        // to zero and the mapping stays fully populated.
        let layers = parse_layers(
            r#"{
                "properties": {
                    "layers": [
                        {
                            "name": "nitrogen",
                            "depths": [{"label": "0-5cm", "values": {"mean": 40}}]
                        }
                    ]
                }
            }"#,
        );

        let attributes = normalize_layers(&layers);
        assert_eq!(attributes.nitrogen, 4.0);
        assert_eq!(attributes.ph, 0.0);
        assert_eq!(attributes.sand, 0.0);
        assert_eq!(attributes.silt, 0.0);
        assert_eq!(attributes.cec, 0.0);
        assert_eq!(attributes.bulk_density, 0.0);
        assert_eq!(attributes.clay, 0.0);
        assert_eq!(attributes.organic_carbon, 0.0);

        let json = serde_json::to_value(attributes).unwrap();
        assert_eq!(json.as_object().unwrap().len(), FEATURE_COUNT);
        assert!(json.as_object().unwrap().values().all(|v| v.is_number()));
    }

    #[test]
    fn missing_top_level_keys_fail_to_parse() {
        let result = serde_json::from_str::<QueryResponse>(r#"{"detail": "rate limited"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<QueryResponse>(r#"{"properties": {}}"#);
        assert!(result.is_err());
    }
}
