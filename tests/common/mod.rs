//! Common test utilities for the factors-importer library tests

use calamine::Data;
use factors_importer::model::{ConversionFactor, edition_label, generate_tags};

/// Shorthand for a string cell
#[allow(dead_code)]
pub fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

/// Shorthand for a numeric cell
#[allow(dead_code)]
pub fn number(value: f64) -> Data {
    Data::Float(value)
}

/// Borrow a grid of owned rows as the row-slice view the parsers take
#[allow(dead_code)]
pub fn as_rows(grid: &[Vec<Data>]) -> Vec<&[Data]> {
    grid.iter().map(|row| row.as_slice()).collect()
}

/// A minimal valid factor for database-level tests
#[allow(dead_code)]
pub fn sample_factor(year: i32, category: &str, activity: &str) -> ConversionFactor {
    ConversionFactor {
        year,
        category: category.to_string(),
        activity: activity.to_string(),
        fuel: None,
        unit: "kWh".to_string(),
        kg_co2e: 0.5,
        kg_co2: None,
        kg_ch4: None,
        kg_n2o: None,
        scope: 3,
        source: edition_label(year),
        sheet: category.to_string(),
        tags: generate_tags(category, activity, None, "kWh"),
    }
}
