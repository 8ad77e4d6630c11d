mod datetime;
mod filesystem;
mod string;

pub use datetime::get_utc_iso_datetime;
pub use filesystem::{write_error_to_log, write_json_pretty};
pub use string::normalize_cell_text;
