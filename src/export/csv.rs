//! CSV Export functionality
//!
//! One row per transaction record, deposits first, then withdrawals.

use crate::error::{PassbookError, PassbookResult};
use crate::models::Ledger;
use std::io::Write;

/// Export all transaction records to CSV
pub fn export_records_csv<W: Write>(ledger: &Ledger, writer: W) -> PassbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Kind", "Timestamp", "Amount"])
        .map_err(|e| PassbookError::Export(e.to_string()))?;

    for record in ledger.all_records() {
        csv_writer
            .write_record([
                record.kind.label().to_string(),
                record.timestamp_string(),
                record.amount.to_string(),
            ])
            .map_err(|e| PassbookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PassbookError::Export(e.to_string()))?;

    Ok(())
}
