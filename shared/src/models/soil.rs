//! Normalized soil attribute mapping and the classifier feature contract

use serde::{Deserialize, Serialize};

/// Number of soil attributes consumed by the fertility classifier
pub const FEATURE_COUNT: usize = 8;

/// Soil attributes the fertility classifier was trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilFeature {
    Nitrogen,
    Ph,
    Sand,
    Silt,
    Cec,
    BulkDensity,
    Clay,
    OrganicCarbon,
}

impl SoilFeature {
    /// Feature order expected by the trained scaler and classifier.
    ///
    /// The position of each attribute in the input vector is part of the
    /// trained artifacts' contract: reordering silently corrupts
    /// predictions. Everything that builds or consumes a feature vector
    /// goes through this constant.
    pub const ORDER: [SoilFeature; FEATURE_COUNT] = [
        SoilFeature::Nitrogen,
        SoilFeature::Ph,
        SoilFeature::Sand,
        SoilFeature::Silt,
        SoilFeature::Cec,
        SoilFeature::BulkDensity,
        SoilFeature::Clay,
        SoilFeature::OrganicCarbon,
    ];

    /// Attribute name as it appears in API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilFeature::Nitrogen => "N",
            SoilFeature::Ph => "ph",
            SoilFeature::Sand => "sand",
            SoilFeature::Silt => "silt",
            SoilFeature::Cec => "cec",
            SoilFeature::BulkDensity => "bulk_density",
            SoilFeature::Clay => "clay",
            SoilFeature::OrganicCarbon => "organic_carbon",
        }
    }
}

/// Normalized topsoil attribute mapping.
///
/// Every field is always present. A property the provider did not report
/// normalizes to 0.0; the mapping carries no presence flag, so callers must
/// not read 0 as "measured zero."
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SoilAttributes {
    /// Total nitrogen, g/kg
    #[serde(rename = "N")]
    pub nitrogen: f64,
    /// pH in water
    pub ph: f64,
    /// Sand fraction, %
    pub sand: f64,
    /// Silt fraction, %
    pub silt: f64,
    /// Cation exchange capacity, cmol(c)/kg
    pub cec: f64,
    /// Bulk density, kg/dm3
    pub bulk_density: f64,
    /// Clay fraction, %
    pub clay: f64,
    /// Soil organic carbon, g/kg
    pub organic_carbon: f64,
}

impl SoilAttributes {
    /// Value of a single attribute
    pub fn get(&self, feature: SoilFeature) -> f64 {
        match feature {
            SoilFeature::Nitrogen => self.nitrogen,
            SoilFeature::Ph => self.ph,
            SoilFeature::Sand => self.sand,
            SoilFeature::Silt => self.silt,
            SoilFeature::Cec => self.cec,
            SoilFeature::BulkDensity => self.bulk_density,
            SoilFeature::Clay => self.clay,
            SoilFeature::OrganicCarbon => self.organic_carbon,
        }
    }

    /// Assemble the classifier input vector in [`SoilFeature::ORDER`]
    pub fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        let mut vector = [0.0; FEATURE_COUNT];
        for (slot, feature) in vector.iter_mut().zip(SoilFeature::ORDER) {
            *slot = self.get(feature);
        }
        vector
    }
}

/// Caller-supplied soil attributes, all optional.
///
/// Used when a request bypasses the provider lookup; values are taken
/// as-is, without de-scaling.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SoilAttributeInput {
    #[serde(rename = "N")]
    pub nitrogen: Option<f64>,
    pub ph: Option<f64>,
    pub sand: Option<f64>,
    pub silt: Option<f64>,
    pub cec: Option<f64>,
    pub bulk_density: Option<f64>,
    pub clay: Option<f64>,
    pub organic_carbon: Option<f64>,
}

impl SoilAttributeInput {
    fn get(&self, feature: SoilFeature) -> Option<f64> {
        match feature {
            SoilFeature::Nitrogen => self.nitrogen,
            SoilFeature::Ph => self.ph,
            SoilFeature::Sand => self.sand,
            SoilFeature::Silt => self.silt,
            SoilFeature::Cec => self.cec,
            SoilFeature::BulkDensity => self.bulk_density,
            SoilFeature::Clay => self.clay,
            SoilFeature::OrganicCarbon => self.organic_carbon,
        }
    }

    /// Enforce completeness over the full feature set.
    ///
    /// The classifier consumes all eight attributes, so all eight must be
    /// present; the error lists every missing attribute name.
    pub fn try_into_complete(self) -> Result<SoilAttributes, Vec<&'static str>> {
        let missing: Vec<&'static str> = SoilFeature::ORDER
            .iter()
            .filter(|feature| self.get(**feature).is_none())
            .map(|feature| feature.as_str())
            .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(SoilAttributes {
            nitrogen: self.nitrogen.unwrap_or_default(),
            ph: self.ph.unwrap_or_default(),
            sand: self.sand.unwrap_or_default(),
            silt: self.silt.unwrap_or_default(),
            cec: self.cec.unwrap_or_default(),
            bulk_density: self.bulk_density.unwrap_or_default(),
            clay: self.clay.unwrap_or_default(),
            organic_carbon: self.organic_carbon.unwrap_or_default(),
        })
    }
}
