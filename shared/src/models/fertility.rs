//! Static fertility class records and recommendation lookup

/// Advisory record for one fertility class.
///
/// Process-wide, read-only; the table below is the full set the service
/// ever serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertilityRecord {
    pub status: &'static str,
    pub crops: &'static [&'static str],
    pub insights: &'static [&'static str],
    pub soil_indicators: &'static [&'static str],
    pub management_practices: &'static [&'static str],
}

pub const LOW_FERTILITY: FertilityRecord = FertilityRecord {
    status: "Low fertility",
    crops: &[
        "Millet",
        "Cassava",
        "Sorghum",
        "Sweet Potatoes",
        "Taro",
        "Groundnuts",
        "Sunflower",
        "Pigeon Pea",
    ],
    insights: &[
        "Add compost or manure to the soil and use NPK fertilizers to provide balanced nutrients for crops.",
        "Cover the soil with mulch and reduce digging to save water and protect the soil.",
        "Grow beans or peas (legumes) after other crops to add natural fertilizer to the soil.",
        "Plant drought-resistant crops like millet or sorghum to ensure a good harvest with less water.",
        "Apply fertilizers in small amounts at different times to help crops absorb nutrients better.",
        "Build trenches, terraces, or small dams to collect and save rainwater for your farm.",
        "Test your soil every 2-3 years to know what it needs and improve it over time.",
        "Check soil pH regularly and add lime or sulfur to keep it balanced for better growth.",
    ],
    soil_indicators: &[
        "Low nutrient content: the soil lacks key nutrients for plants.",
        "Poor water retention: the soil dries out quickly.",
        "Limited organic matter: the soil has little decomposed material.",
        "The soil's pH is unbalanced.",
    ],
    management_practices: &[
        "Use fertilizers like urea or DAP in smaller portions during planting and growth stages to avoid waste and improve nutrient uptake.",
        "Plant legumes such as clover, alfalfa, or cowpeas and mix them into the soil to increase nitrogen and organic matter.",
        "Grow maize, beans, or sorghum along the natural curves of sloped land to reduce soil erosion and water loss.",
        "Consider drip irrigation for water efficiency.",
        "Use mulching to conserve moisture and reduce soil erosion.",
        "Test the soil, and if it is too acidic add lime, or if it is too alkaline add sulfur, to maintain a healthy range for crops.",
    ],
};

pub const MODERATE_FERTILITY: FertilityRecord = FertilityRecord {
    status: "Moderately fertile soils",
    crops: &[
        "Maize",
        "Beans",
        "Potatoes",
        "Cowpeas",
        "Chili Peppers",
        "Cabbage",
        "Tomatoes",
        "Soybeans",
    ],
    insights: &[
        "Add the right mix of nutrients like NPK to boost moderate soil productivity.",
        "Plant cover crops and add compost to improve soil structure and fertility.",
        "Rotate crops to prevent nutrient depletion and sustain soil fertility.",
        "Check crops for signs of nutrient deficiencies and adjust fertilization accordingly.",
        "Implement precision farming techniques where possible.",
        "Apply irrigation carefully to ensure soil retains enough moisture.",
        "Control pests using a mix of biological and chemical methods.",
        "Track fertilizer use to improve nutrient management over time.",
    ],
    soil_indicators: &[
        "Soil has enough nutrients for moderate plant growth.",
        "Soil holds some water, but may need irrigation during dry periods.",
        "Soil has enough organic material, but may benefit from more input.",
        "Soil pH is usually suitable, but adjustments may be needed.",
    ],
    management_practices: &[
        "Test soil regularly to monitor nutrient levels and pH.",
        "Apply fertilizers based on soil tests and crop needs.",
        "Grow compatible crops together for better nutrient use.",
        "Use cover crops to improve fertility and soil health.",
        "Combine chemical and organic fertilizers for soil health.",
    ],
};

pub const HIGH_FERTILITY: FertilityRecord = FertilityRecord {
    status: "Highly fertile soils",
    crops: &[
        "Wheat",
        "Sugarcane",
        "Tomatoes",
        "Rice",
        "Coffee",
        "Cocoa",
        "Avocados",
        "Bananas",
        "Peppers",
    ],
    insights: &[
        "Keep using balanced fertilizers and organic matter to preserve soil fertility.",
        "Grow a variety of crops to prevent soil depletion and pests.",
        "Test the soil regularly to avoid nutrient deficiencies or excesses.",
        "Use minimal tillage and cover crops to protect soil and improve water use.",
        "Select improved seed varieties for better harvests and resilience.",
        "Adopt drip or sprinkler systems to efficiently water crops.",
        "Encourage beneficial soil organisms by adding organic matter.",
        "Consider processing crops into value-added products to boost income.",
    ],
    soil_indicators: &[
        "Soil has a proper mix of essential nutrients for healthy plant growth.",
        "Soil holds enough water to support crops during dry periods.",
        "Soil contains decomposed plant and animal material, improving fertility and water retention.",
        "Soil pH is balanced, allowing crops to easily absorb nutrients.",
    ],
    management_practices: &[
        "Monitor nutrient levels regularly.",
        "Rotate crops to prevent nutrient depletion and control pests.",
        "Plant cover crops to improve soil fertility and reduce erosion.",
        "Space crops properly for efficient growth.",
        "Use practices like terracing and cover crops to protect soil.",
    ],
};

pub const UNKNOWN_FERTILITY: FertilityRecord = FertilityRecord {
    status: "Unknown",
    crops: &[],
    insights: &["No insights available."],
    soil_indicators: &["No soil indicators available."],
    management_practices: &["No management practices available."],
};

/// Map a predicted class index to its advisory record.
///
/// Indices outside the trained range resolve to the "Unknown" fallback; an
/// unmapped class is not an error.
pub fn fertility_record(class_index: u32) -> &'static FertilityRecord {
    match class_index {
        0 => &LOW_FERTILITY,
        1 => &MODERATE_FERTILITY,
        2 => &HIGH_FERTILITY,
        _ => &UNKNOWN_FERTILITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_zero_is_low_fertility_with_crops() {
        let record = fertility_record(0);
        assert_eq!(record.status, "Low fertility");
        assert!(!record.crops.is_empty());
    }

    #[test]
    fn trained_classes_have_full_advisory_text() {
        for index in 0..=2 {
            let record = fertility_record(index);
            assert!(!record.crops.is_empty());
            assert!(!record.insights.is_empty());
            assert!(!record.soil_indicators.is_empty());
            assert!(!record.management_practices.is_empty());
        }
    }

    #[test]
    fn out_of_range_class_falls_back_to_unknown() {
        let record = fertility_record(99);
        assert_eq!(record.status, "Unknown");
        assert!(record.crops.is_empty());
    }
}
