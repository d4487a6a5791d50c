//! Transaction record model
//!
//! A deposit or withdrawal as kept in the ledger history. Records render as
//! `"<MM/DD/YYYY HH:MM:SS> Deposit: <amount>"` and parse back from that line.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::clock::TIMESTAMP_FORMAT;
use super::money::Amount;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Deposit,
    Withdrawal,
}

impl RecordKind {
    /// Label used in the rendered record line
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }

    /// Classify a raw line by substring, checking "Deposit" first
    pub fn classify(line: &str) -> Option<Self> {
        if line.contains(Self::Deposit.label()) {
            Some(Self::Deposit)
        } else if line.contains(Self::Withdrawal.label()) {
            Some(Self::Withdrawal)
        } else {
            None
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single deposit or withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub kind: RecordKind,

    /// Local time the transaction was made
    pub timestamp: NaiveDateTime,

    /// Always positive; the direction is given by `kind`
    pub amount: Amount,
}

impl TransactionRecord {
    pub fn new(kind: RecordKind, timestamp: NaiveDateTime, amount: Amount) -> Self {
        Self {
            kind,
            timestamp,
            amount,
        }
    }

    pub fn deposit(timestamp: NaiveDateTime, amount: Amount) -> Self {
        Self::new(RecordKind::Deposit, timestamp, amount)
    }

    pub fn withdrawal(timestamp: NaiveDateTime, amount: Amount) -> Self {
        Self::new(RecordKind::Withdrawal, timestamp, amount)
    }

    /// Timestamp rendered as `MM/DD/YYYY HH:MM:SS`
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Line written to the data file
    ///
    /// Same layout as `Display`, but the amount keeps every digit needed to
    /// read back the value that changed the balance.
    pub fn to_line(&self) -> String {
        format!(
            "{} {}: {}",
            self.timestamp_string(),
            self.kind.label(),
            self.amount.to_record_string()
        )
    }

    /// Parse a rendered record line
    pub fn parse(line: &str) -> Result<Self, RecordParseError> {
        let line = line.trim();
        let kind = RecordKind::classify(line)
            .ok_or_else(|| RecordParseError::UnknownKind(line.to_string()))?;

        let marker = format!(" {}:", kind.label());
        let (timestamp, amount) = line
            .split_once(&marker)
            .ok_or_else(|| RecordParseError::InvalidFormat(line.to_string()))?;

        let timestamp = NaiveDateTime::parse_from_str(timestamp.trim(), TIMESTAMP_FORMAT)
            .map_err(|_| RecordParseError::InvalidTimestamp(timestamp.trim().to_string()))?;

        let amount = Amount::parse_exact(amount)
            .filter(|a| a.is_positive())
            .ok_or_else(|| RecordParseError::InvalidAmount(amount.trim().to_string()))?;

        Ok(Self::new(kind, timestamp, amount))
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.timestamp_string(),
            self.kind.label(),
            self.amount
        )
    }
}

/// Error type for record line parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordParseError {
    UnknownKind(String),
    InvalidFormat(String),
    InvalidTimestamp(String),
    InvalidAmount(String),
}

impl fmt::Display for RecordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(s) => write!(f, "Not a deposit or withdrawal: {}", s),
            Self::InvalidFormat(s) => write!(f, "Invalid record format: {}", s),
            Self::InvalidTimestamp(s) => write!(f, "Invalid timestamp: {}", s),
            Self::InvalidAmount(s) => write!(f, "Invalid record amount: {}", s),
        }
    }
}

impl std::error::Error for RecordParseError {}
