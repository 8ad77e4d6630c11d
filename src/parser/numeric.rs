use calamine::Data;

/// Extract a numeric value from an arbitrary cell.
///
/// Text values tolerate thousands separators ("1,234.5" parses to 1234.5);
/// text that does not parse (e.g. "N/A") is "no value", never an error.
/// NaN and infinities coming out of the spreadsheet layer are also treated
/// as missing.
pub fn parse_numeric_cell(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => {
            if f.is_finite() {
                Some(*f)
            } else {
                None
            }
        }
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => {
            let cleaned = s.trim().replace(',', "");
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// A numeric cell value, but only when strictly positive
pub fn parse_positive_cell(cell: &Data) -> Option<f64> {
    parse_numeric_cell(cell).filter(|value| *value > 0.0)
}
