//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for a human-readable backup.

use crate::error::{PassbookError, PassbookResult};
use crate::export::json::LedgerExport;
use crate::models::Ledger;
use std::io::Write;

/// Export the ledger to YAML format
pub fn export_full_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> PassbookResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    write_header(writer, &export).map_err(|e| PassbookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PassbookError::Export(e.to_string()))?;

    Ok(())
}

fn write_header<W: Write>(writer: &mut W, export: &LedgerExport) -> std::io::Result<()> {
    writeln!(writer, "# Passbook Ledger Export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)
}
