//! Custom error types for Passbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Passbook operations
#[derive(Error, Debug)]
pub enum PassbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Deposit or withdrawal amount that is zero, negative or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: String, available: String },

    /// The ledger data file could not be opened for reading
    #[error("Error opening file for reading: {}: {reason}", path.display())]
    DataFileUnreadable { path: PathBuf, reason: String },

    /// The ledger data file was read but its contents are not a valid ledger
    #[error("Corrupt ledger data at line {line}: {message}")]
    Corrupt { line: usize, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PassbookError {
    /// Create a corrupt-data error for a 1-based line number
    pub fn corrupt(line: usize, message: impl Into<String>) -> Self {
        Self::Corrupt {
            line,
            message: message.into(),
        }
    }

    /// Check if this error rejected a deposit or withdrawal without touching the ledger
    pub fn is_rejected_amount(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InsufficientFunds { .. }
        )
    }

    /// Check if this error means the ledger could not be loaded at all
    pub fn is_fatal_load(&self) -> bool {
        matches!(self, Self::DataFileUnreadable { .. } | Self::Corrupt { .. })
    }
}

impl From<std::io::Error> for PassbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PassbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Passbook operations
pub type PassbookResult<T> = Result<T, PassbookError>;
