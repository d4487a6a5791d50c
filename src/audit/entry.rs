//! Audit entry data structures
//!
//! Defines the structure of audit log entries: which ledger operation ran,
//! the amount involved and the balance it left behind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Amount, Receipt, RecordKind};

/// Types of ledger operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Money added to the balance
    Deposit,
    /// Money taken from the balance
    Withdrawal,
    /// Balance assigned directly (opening balance)
    SetBalance,
}

impl From<RecordKind> for Operation {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Deposit => Operation::Deposit,
            RecordKind::Withdrawal => Operation::Withdrawal,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Deposit => write!(f, "DEPOSIT"),
            Operation::Withdrawal => write!(f, "WITHDRAWAL"),
            Operation::SetBalance => write!(f, "SET_BALANCE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation was logged (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Amount deposited, withdrawn or assigned
    pub amount: Amount,

    /// Balance after the operation
    pub balance_after: Amount,
}

impl AuditEntry {
    /// Create an entry for an accepted deposit or withdrawal
    pub fn from_receipt(receipt: &Receipt) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: receipt.record.kind.into(),
            amount: receipt.record.amount,
            balance_after: receipt.balance,
        }
    }

    /// Create an entry for a direct balance assignment
    pub fn set_balance(balance: Amount) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::SetBalance,
            amount: balance,
            balance_after: balance,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} (balance {})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.amount,
            self.balance_after
        )
    }
}
