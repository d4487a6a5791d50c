//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use crate::error::{PassbookError, PassbookResult};
use crate::models::{Amount, Ledger, TransactionRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub balance: Amount,

    pub balance_history: Vec<Amount>,

    pub deposits: Vec<TransactionRecord>,

    pub withdrawals: Vec<TransactionRecord>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub deposit_count: usize,
    pub withdrawal_count: usize,
    pub total_deposited: Amount,
    pub total_withdrawn: Amount,

    /// Earliest record timestamp, `MM/DD/YYYY HH:MM:SS`
    pub earliest_transaction: Option<String>,

    /// Latest record timestamp, `MM/DD/YYYY HH:MM:SS`
    pub latest_transaction: Option<String>,
}

impl LedgerExport {
    /// Snapshot a ledger for export
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let earliest = ledger.all_records().min_by_key(|r| r.timestamp);
        let latest = ledger.all_records().max_by_key(|r| r.timestamp);

        let metadata = ExportMetadata {
            deposit_count: ledger.deposit_records().count(),
            withdrawal_count: ledger.withdrawal_records().count(),
            total_deposited: ledger.total_deposited(),
            total_withdrawn: ledger.total_withdrawn(),
            earliest_transaction: earliest.map(|r| r.timestamp_string()),
            latest_transaction: latest.map(|r| r.timestamp_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            balance: ledger.current_balance(),
            balance_history: ledger.balance_history().to_vec(),
            deposits: ledger.deposit_records().cloned().collect(),
            withdrawals: ledger.withdrawal_records().cloned().collect(),
            metadata,
        }
    }
}

/// Export the ledger to JSON format
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> PassbookResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };

    result.map_err(|e| PassbookError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FixedClock;

    #[test]
    fn test_json_export() {
        let early = FixedClock::parse("01/05/2026 10:00:00").unwrap();
        let late = FixedClock::parse("03/05/2026 10:00:00").unwrap();
        let mut ledger = Ledger::new();
        ledger.deposit(Amount::new(100.0), &late).unwrap();
        ledger.withdraw(Amount::new(40.0), &early).unwrap();

        let mut output = Vec::new();
        export_full_json(&ledger, &mut output, true).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        assert!(json_str.contains("\"schema_version\""));
        assert!(json_str.contains("\"withdrawal\""));

        let export: LedgerExport = serde_json::from_str(&json_str).unwrap();
        assert_eq!(export.metadata.deposit_count, 1);
        assert_eq!(export.metadata.withdrawal_count, 1);
        assert_eq!(
            export.metadata.earliest_transaction.as_deref(),
            Some("01/05/2026 10:00:00")
        );
        assert_eq!(
            export.metadata.latest_transaction.as_deref(),
            Some("03/05/2026 10:00:00")
        );
        assert_eq!(export.balance, Amount::new(60.0));
        assert_eq!(export.balance_history, ledger.balance_history());
        assert_eq!(export.withdrawals[0].amount, Amount::new(40.0));
    }

    #[test]
    fn test_empty_ledger_export() {
        let export = LedgerExport::from_ledger(&Ledger::new());
        assert!(export.metadata.earliest_transaction.is_none());
        assert_eq!(export.balance, Amount::zero());
    }
}
