//! Header row detection and header-to-column mapping.
//!
//! Header wording varies release to release, so detection is keyword-density
//! based rather than exact-match based, and mapping works on per-cell
//! contains-rules evaluated in priority order.

use calamine::Data;

use crate::parser::cell_text;

/// Keywords counted when scoring a candidate header row
const HEADER_KEYWORDS: &[&str] = &[
    "activity", "fuel", "unit", "co2e", "co2", "ch4", "n2o", "emission",
];

/// Distinct keyword hits required before a row is accepted as the header.
/// Four balances stray rows mentioning a couple of the keywords against
/// genuine headers that use only three of the canonical words.
const HEADER_KEYWORD_THRESHOLD: usize = 4;

/// Rows scanned from the top of a sheet when looking for the header
const HEADER_SCAN_LIMIT: usize = 30;

/// Canonical field → column index mapping produced by [`map_header_columns`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderColumns {
    pub activity: Option<usize>,
    pub fuel: Option<usize>,
    pub unit: Option<usize>,
    pub kg_co2e: Option<usize>,
    pub kg_co2: Option<usize>,
    pub kg_ch4: Option<usize>,
    pub kg_n2o: Option<usize>,
}

enum HeaderField {
    Activity,
    Fuel,
    Unit,
    KgCo2e,
    KgCo2,
    KgCh4,
    KgN2o,
}

/// Locate the header row within the first rows of a sheet, if any.
///
/// Each row's cell text is lower-cased and concatenated; the first row where
/// at least [`HEADER_KEYWORD_THRESHOLD`] distinct keywords appear as
/// substrings is the header.
pub fn detect_header_row(rows: &[&[Data]]) -> Option<usize> {
    for (index, row) in rows.iter().take(HEADER_SCAN_LIMIT).enumerate() {
        let text = row
            .iter()
            .map(|cell| cell_text(cell).to_lowercase())
            .collect::<Vec<String>>()
            .join(" ");

        let hits = HEADER_KEYWORDS
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count();

        if hits >= HEADER_KEYWORD_THRESHOLD {
            return Some(index);
        }
    }
    None
}

/// Translate header cell text into the canonical field → column mapping.
///
/// A column is claimed by at most one field, and the first column matching a
/// field wins; later columns never overwrite an already-assigned field.
pub fn map_header_columns(header_row: &[Data]) -> HeaderColumns {
    let mut columns = HeaderColumns::default();

    for (index, cell) in header_row.iter().enumerate() {
        let header = cell_text(cell).to_lowercase();
        if header.is_empty() {
            continue;
        }
        let Some(field) = match_header_field(&header) else {
            continue;
        };

        let slot = match field {
            HeaderField::Activity => &mut columns.activity,
            HeaderField::Fuel => &mut columns.fuel,
            HeaderField::Unit => &mut columns.unit,
            HeaderField::KgCo2e => &mut columns.kg_co2e,
            HeaderField::KgCo2 => &mut columns.kg_co2,
            HeaderField::KgCh4 => &mut columns.kg_ch4,
            HeaderField::KgN2o => &mut columns.kg_n2o,
        };
        if slot.is_none() {
            *slot = Some(index);
        }
    }

    columns
}

// Rules are evaluated in priority order; the headline combined-gas column
// ("kg CO2e") must be told apart from the per-gas breakdown columns
// ("kg CO2e of CO2 per unit" etc.) by the "per unit" phrasing.
fn match_header_field(header: &str) -> Option<HeaderField> {
    if header.contains("activity") || header.contains("fuel type") || header.contains("description")
    {
        Some(HeaderField::Activity)
    } else if header.contains("fuel") && !header.contains("type") {
        Some(HeaderField::Fuel)
    } else if header.contains("unit")
        && !header.contains("uncertainty")
        && !header.contains("per unit")
    {
        Some(HeaderField::Unit)
    } else if (header.contains("kg co2e") || (header.contains("co2") && header.contains("equivalent")))
        && !header.contains("per unit")
    {
        Some(HeaderField::KgCo2e)
    } else if header == "co2" || (header.contains("kg co2e of co2") && header.contains("per unit"))
    {
        Some(HeaderField::KgCo2)
    } else if header == "ch4" || (header.contains("kg co2e of ch4") && header.contains("per unit"))
    {
        Some(HeaderField::KgCh4)
    } else if header == "n2o" || (header.contains("kg co2e of n2o") && header.contains("per unit"))
    {
        Some(HeaderField::KgN2o)
    } else {
        None
    }
}
