mod conversion_factor;
mod database;

pub use conversion_factor::{ConversionFactor, edition_label, generate_tags};
pub use database::{ConversionFactorDatabase, DatabaseSummary};
