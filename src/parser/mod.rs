pub mod classify;
pub mod header;
pub mod numeric;
pub mod row;
pub mod workbook;

use calamine::Data;

use crate::utils::normalize_cell_text;

/// Trimmed, whitespace-normalized text of a cell; error cells read as empty
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => normalize_cell_text(s),
        other => normalize_cell_text(&other.to_string()),
    }
}
