use serde::{Deserialize, Serialize};

/// One normalized conversion factor record: a coefficient relating an
/// activity quantity (e.g. kWh of gas burned) to an emitted-mass-equivalent
/// quantity (kg CO2e), tagged with category, scope and provenance.
///
/// Validity is constructive: the parsers never build a record with an empty
/// `activity`, an empty `unit` or a non-positive `kg_co2e`. Individual-gas
/// components are omitted (not zero) when the source sheet does not break
/// them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactor {
    pub year: i32,
    pub category: String,
    pub activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<String>,
    pub unit: String,
    #[serde(rename = "kgCO2e")]
    pub kg_co2e: f64,
    #[serde(rename = "kgCO2", skip_serializing_if = "Option::is_none")]
    pub kg_co2: Option<f64>,
    #[serde(rename = "kgCH4", skip_serializing_if = "Option::is_none")]
    pub kg_ch4: Option<f64>,
    #[serde(rename = "kgN2O", skip_serializing_if = "Option::is_none")]
    pub kg_n2o: Option<f64>,
    pub scope: u8,
    pub source: String,
    pub sheet: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Provenance label for a given edition year
pub fn edition_label(year: i32) -> String {
    format!("UK Government GHG Conversion Factors {year}")
}

/// Generate searchable tags for a conversion factor
///
/// Category, activity and fuel text are lower-cased, split on whitespace
/// after brackets and hyphens are replaced by spaces; the unit is kept as a
/// single tag. Single-character tokens are dropped and the result is
/// deduplicated and sorted so identical records always carry identical tags.
pub fn generate_tags(category: &str, activity: &str, fuel: Option<&str>, unit: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    let mut add_words = |text: &str| {
        let cleaned = text.to_lowercase().replace(['(', ')', '-', '/'], " ");
        for word in cleaned.split_whitespace() {
            if word.len() > 1 && !tags.iter().any(|tag| tag == word) {
                tags.push(word.to_string());
            }
        }
    };

    add_words(category);
    add_words(activity);
    if let Some(fuel) = fuel {
        add_words(fuel);
    }

    let unit_tag = unit.trim().to_lowercase();
    if unit_tag.len() > 1 && !tags.contains(&unit_tag) {
        tags.push(unit_tag);
    }

    tags.sort();
    tags
}
