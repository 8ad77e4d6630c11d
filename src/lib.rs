pub mod model;
pub mod parser;
pub mod utils;

pub const ERRORS_LOG_FILE: &str = "errors.log";
