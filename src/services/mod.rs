//! Service layer for Passbook
//!
//! The service layer ties the ledger model to storage, the clock and the
//! audit log.

pub mod ledger;

pub use ledger::LedgerService;
