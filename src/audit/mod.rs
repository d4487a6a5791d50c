//! Audit logging system for Passbook
//!
//! Records every accepted deposit, withdrawal and balance assignment in an
//! append-only audit log, independent of the ledger data file.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, amount and the
//!   resulting balance.
//! - `AuditLogger`: appends entries to the audit log file using a
//!   line-delimited JSON format (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use passbook::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let receipt = ledger.deposit(Amount::new(100.0), &SystemClock)?;
//! logger.log(&AuditEntry::from_receipt(&receipt))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
