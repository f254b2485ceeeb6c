//! Data export
//!
//! Exports the stored data to CSV, JSON or YAML. The JSON/YAML exports are
//! a complete versioned snapshot; the CSV export is a flat row-per-expense
//! table including the normalized figures.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
