//! Export module for Passbook
//!
//! Provides ledger export in multiple formats:
//! - CSV: transaction records (spreadsheet-compatible)
//! - JSON: machine-readable full ledger
//! - YAML: human-readable full ledger

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_records_csv;
pub use self::json::{export_full_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
