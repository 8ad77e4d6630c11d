//! Row-level extraction: the header-mapped parser and the positional
//! fallback parser. For a given sheet exactly one of the two runs.

use calamine::Data;

use crate::parser::cell_text;
use crate::parser::header::HeaderColumns;
use crate::parser::numeric::{parse_numeric_cell, parse_positive_cell};

/// Unit keywords the fallback parser accepts as a denominator column
const UNIT_KEYWORDS: &[&str] = &[
    "tonne",
    "litre",
    "kwh",
    "kg",
    "cubic",
    "mile",
    "passenger-km",
    "tonne-km",
];

/// Columns scanned to the right of a unit cell for the factor value
const FALLBACK_VALUE_SPAN: usize = 4;

/// Minimum cells a row needs before the fallback parser will look at it
const FALLBACK_MIN_CELLS: usize = 4;

/// Sheet-independent parts of a factor extracted from a single row.
/// Category, scope and provenance are attached later by the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFactor {
    pub activity: String,
    pub fuel: Option<String>,
    pub unit: String,
    pub kg_co2e: f64,
    pub kg_co2: Option<f64>,
    pub kg_ch4: Option<f64>,
    pub kg_n2o: Option<f64>,
}

fn mapped_text(row: &[Data], column: Option<usize>) -> String {
    column
        .and_then(|index| row.get(index))
        .map(cell_text)
        .unwrap_or_default()
}

fn mapped_positive(row: &[Data], column: Option<usize>) -> Option<f64> {
    column
        .and_then(|index| row.get(index))
        .and_then(parse_positive_cell)
}

/// Parse one data row through the header mapping.
///
/// Rows with an empty unit or a missing/non-positive combined-gas value
/// carry no usable information and yield nothing. When a distinct fuel
/// sub-type exists it is prepended to the activity joined by " - ", unless
/// the activity text already contains it.
pub fn parse_mapped_row(row: &[Data], columns: &HeaderColumns) -> Option<RawFactor> {
    let unit = mapped_text(row, columns.unit);
    if unit.is_empty() {
        return None;
    }

    let kg_co2e = columns
        .kg_co2e
        .and_then(|index| row.get(index))
        .and_then(parse_numeric_cell)?;
    if kg_co2e <= 0.0 {
        return None;
    }

    let fuel = mapped_text(row, columns.fuel);
    let mut activity = mapped_text(row, columns.activity);
    if !fuel.is_empty() {
        if activity.is_empty() {
            activity = fuel.clone();
        } else if !activity.contains(fuel.as_str()) {
            activity = format!("{fuel} - {activity}");
        }
    }
    if activity.is_empty() {
        return None;
    }

    Some(RawFactor {
        activity,
        fuel: (!fuel.is_empty()).then_some(fuel),
        unit,
        kg_co2e,
        kg_co2: mapped_positive(row, columns.kg_co2),
        kg_ch4: mapped_positive(row, columns.kg_ch4),
        kg_n2o: mapped_positive(row, columns.kg_n2o),
    })
}

/// Positional heuristic for sheets with no detectable header row.
///
/// Scans left to right for the first cell containing a unit keyword, then
/// looks up to [`FALLBACK_VALUE_SPAN`] columns to its right for the first
/// positive number. The activity is everything left of the unit column
/// joined by " - ". Rows that do not produce both parts are skipped
/// silently; recall is expected to be lower than the header-based path.
pub fn parse_fallback_row(row: &[Data]) -> Option<RawFactor> {
    if row.len() < FALLBACK_MIN_CELLS {
        return None;
    }

    let unit_column = row.iter().position(|cell| {
        let text = cell_text(cell).to_lowercase();
        !text.is_empty() && UNIT_KEYWORDS.iter().any(|keyword| text.contains(keyword))
    })?;
    let unit = cell_text(&row[unit_column]);

    let mut kg_co2e = None;
    for cell in row.iter().skip(unit_column + 1).take(FALLBACK_VALUE_SPAN) {
        if let Some(value) = parse_positive_cell(cell) {
            kg_co2e = Some(value);
            break;
        }
    }
    let kg_co2e = kg_co2e?;

    let activity = row[..unit_column]
        .iter()
        .map(cell_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<String>>()
        .join(" - ");
    if activity.is_empty() {
        return None;
    }

    Some(RawFactor {
        activity,
        fuel: None,
        unit,
        kg_co2e,
        kg_co2: None,
        kg_ch4: None,
        kg_n2o: None,
    })
}
