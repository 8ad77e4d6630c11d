//! Year-file orchestration and the batch driver.
//!
//! Errors are contained at the smallest unit: a bad sheet never aborts its
//! workbook, a bad workbook never aborts the batch, and the run always
//! produces a database, even a degraded or empty one.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};
use thiserror::Error;

use crate::model::{ConversionFactor, ConversionFactorDatabase, edition_label, generate_tags};
use crate::parser::classify::{categorize_sheet, classify_scope, is_data_sheet};
use crate::parser::header::{detect_header_row, map_header_columns};
use crate::parser::row::{RawFactor, parse_fallback_row, parse_mapped_row};
use crate::utils::write_error_to_log;

/// Errors contained at the file or sheet level during a batch run
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to open workbook {path}: {source}")]
    WorkbookOpen {
        path: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read sheet '{sheet}': {source}")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// First year-like run of four digits in a file name
/// (e.g. "ghg-conversion-factors-2023.xlsx" → 2023)
pub fn extract_year(file_name: &str) -> Option<i32> {
    let chars: Vec<char> = file_name.chars().collect();
    for window in chars.windows(4) {
        if window.iter().all(|c| c.is_ascii_digit()) {
            if let Ok(year) = window.iter().collect::<String>().parse::<i32>() {
                if (1900..=2100).contains(&year) {
                    return Some(year);
                }
            }
        }
    }
    None
}

/// Extract every factor from one sheet's row grid.
///
/// Records come from exactly one path: the header-mapped parser when a
/// header row is detected, otherwise the positional fallback parser.
pub fn process_sheet(sheet_name: &str, rows: &[&[Data]], year: i32) -> Vec<ConversionFactor> {
    let raw_factors: Vec<RawFactor> = match detect_header_row(rows) {
        Some(header_index) => {
            let columns = map_header_columns(rows[header_index]);
            rows[header_index + 1..]
                .iter()
                .filter_map(|row| parse_mapped_row(row, &columns))
                .collect()
        }
        None => rows
            .iter()
            .filter_map(|row| parse_fallback_row(row))
            .collect(),
    };

    raw_factors
        .into_iter()
        .map(|raw| materialize_factor(raw, sheet_name, year))
        .collect()
}

fn materialize_factor(raw: RawFactor, sheet_name: &str, year: i32) -> ConversionFactor {
    let category = categorize_sheet(sheet_name).to_string();
    let scope = classify_scope(sheet_name, &raw.activity);
    let tags = generate_tags(&category, &raw.activity, raw.fuel.as_deref(), &raw.unit);

    ConversionFactor {
        year,
        category,
        activity: raw.activity,
        fuel: raw.fuel,
        unit: raw.unit,
        kg_co2e: raw.kg_co2e,
        kg_co2: raw.kg_co2,
        kg_ch4: raw.kg_ch4,
        kg_n2o: raw.kg_n2o,
        scope,
        source: edition_label(year),
        sheet: sheet_name.to_string(),
        tags,
    }
}

/// Extract all factors from one yearly workbook.
///
/// Administrative sheets are filtered out before any parsing; a sheet that
/// fails to read is logged and skipped without aborting the file.
pub fn process_workbook(path: &Path, year: i32) -> Result<Vec<ConversionFactor>, ImportError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| ImportError::WorkbookOpen {
        path: path.display().to_string(),
        source,
    })?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut factors = Vec::new();

    for sheet_name in sheet_names {
        if !is_data_sheet(&sheet_name) {
            continue;
        }

        match workbook.worksheet_range(&sheet_name) {
            Ok(range) => {
                let rows: Vec<&[Data]> = range.rows().collect();
                factors.extend(process_sheet(&sheet_name, &rows, year));
            }
            Err(source) => {
                let error = ImportError::SheetRead {
                    sheet: sheet_name.clone(),
                    source,
                };
                write_error_to_log(
                    "Sheet Processing Error",
                    &format!("{}: {}", path.display(), error),
                );
                eprintln!("⚠️ Skipping sheet '{}' in {}", sheet_name, path.display());
            }
        }
    }

    Ok(factors)
}

/// Drive the full batch over every workbook in `input_dir` that embeds a
/// detectable edition year, in ascending year order
pub fn build_database(input_dir: &Path) -> Result<ConversionFactorDatabase> {
    let mut workbooks = discover_workbooks(input_dir)?;
    workbooks.sort();

    let mut all_factors = Vec::new();
    let mut processed_documents = 0;

    for (year, path) in workbooks {
        match process_workbook(&path, year) {
            Ok(factors) => {
                println!("📄 {} ({}): {} factors", path.display(), year, factors.len());
                all_factors.extend(factors);
                processed_documents += 1;
            }
            Err(error) => {
                write_error_to_log("Workbook Processing Error", &error.to_string());
                eprintln!("⚠️ Skipping {}: {}", path.display(), error);
            }
        }
    }

    Ok(ConversionFactorDatabase::build(
        all_factors,
        processed_documents,
    ))
}

/// Workbook files in `input_dir` with a detectable edition year.
/// Files without one, and non-spreadsheet files, are skipped.
fn discover_workbooks(input_dir: &Path) -> Result<Vec<(i32, PathBuf)>> {
    let entries = std::fs::read_dir(input_dir)
        .with_context(|| format!("Failed to read input directory {}", input_dir.display()))?;

    let mut workbooks = Vec::new();
    for entry in entries {
        let path = entry?.path();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        if !matches!(extension.as_deref(), Some("xlsx") | Some("xls")) {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if let Some(year) = extract_year(file_name) {
            workbooks.push((year, path));
        }
    }

    Ok(workbooks)
}
