use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ConversionFactor;
use crate::utils::write_json_pretty;

/// The aggregate output of a batch run: the flat record list plus year- and
/// category-indexed groupings and build metadata.
///
/// Rebuilt in full on every run; the `BTreeMap` groupings keep iteration
/// order, `years_covered` and `categories` deterministically sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionFactorDatabase {
    pub last_updated: DateTime<Utc>,
    pub total_factors: usize,
    pub total_documents: usize,
    pub years_covered: Vec<i32>,
    pub categories: Vec<String>,
    pub factors_by_year: BTreeMap<i32, Vec<ConversionFactor>>,
    pub factors_by_category: BTreeMap<String, Vec<ConversionFactor>>,
    pub all_factors: Vec<ConversionFactor>,
}

/// Aggregate counters only, for consumers that do not need the records
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSummary {
    pub generated_at: DateTime<Utc>,
    pub total_factors: usize,
    pub total_documents: usize,
    pub years_covered: Vec<i32>,
    pub categories: Vec<String>,
    pub latest_year: Option<i32>,
    pub oldest_year: Option<i32>,
}

impl ConversionFactorDatabase {
    /// Fold the full ordered factor list into the aggregate database.
    ///
    /// This step has no failure modes of its own; it only processes records
    /// the parsers already validated.
    pub fn build(all_factors: Vec<ConversionFactor>, total_documents: usize) -> Self {
        let mut factors_by_year: BTreeMap<i32, Vec<ConversionFactor>> = BTreeMap::new();
        let mut factors_by_category: BTreeMap<String, Vec<ConversionFactor>> = BTreeMap::new();

        for factor in &all_factors {
            factors_by_year
                .entry(factor.year)
                .or_default()
                .push(factor.clone());
            factors_by_category
                .entry(factor.category.clone())
                .or_default()
                .push(factor.clone());
        }

        let years_covered: Vec<i32> = factors_by_year.keys().copied().collect();
        let categories: Vec<String> = factors_by_category.keys().cloned().collect();

        ConversionFactorDatabase {
            last_updated: Utc::now(),
            total_factors: all_factors.len(),
            total_documents,
            years_covered,
            categories,
            factors_by_year,
            factors_by_category,
            all_factors,
        }
    }

    pub fn summary(&self) -> DatabaseSummary {
        DatabaseSummary {
            generated_at: self.last_updated,
            total_factors: self.total_factors,
            total_documents: self.total_documents,
            years_covered: self.years_covered.clone(),
            categories: self.categories.clone(),
            latest_year: self.years_covered.last().copied(),
            oldest_year: self.years_covered.first().copied(),
        }
    }

    pub fn save_to_json(&self, path: &Path) -> Result<()> {
        write_json_pretty(path, self)
    }

    /// Export the flat factor list to CSV for spreadsheet consumers
    pub fn export_to_csv(&self, path: &Path) -> Result<()> {
        // Quote fields only when necessary (e.g., when they contain commas)
        let mut wtr = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_path(path)?;

        wtr.write_record([
            "year", "category", "activity", "fuel", "unit", "kgCO2e", "kgCO2", "kgCH4", "kgN2O",
            "scope", "source", "sheet",
        ])?;

        for factor in &self.all_factors {
            let optional = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
            wtr.write_record([
                factor.year.to_string(),
                factor.category.clone(),
                factor.activity.clone(),
                factor.fuel.clone().unwrap_or_default(),
                factor.unit.clone(),
                factor.kg_co2e.to_string(),
                optional(factor.kg_co2),
                optional(factor.kg_ch4),
                optional(factor.kg_n2o),
                factor.scope.to_string(),
                factor.source.clone(),
                factor.sheet.clone(),
            ])?;
        }

        wtr.flush()?;

        Ok(())
    }
}

impl DatabaseSummary {
    pub fn save_to_json(&self, path: &Path) -> Result<()> {
        write_json_pretty(path, self)
    }
}
