//! Core data models for Passbook
//!
//! The ledger, its transaction records, the amount type and the clock that
//! timestamps every transaction.

pub mod clock;
pub mod ledger;
pub mod money;
pub mod record;

pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use ledger::{Ledger, Receipt};
pub use money::{Amount, AmountParseError};
pub use record::{RecordKind, RecordParseError, TransactionRecord};
