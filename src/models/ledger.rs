//! Ledger model
//!
//! The balance of the single account together with its balance snapshots and
//! the deposit and withdrawal histories. All histories are append-only.

use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::money::Amount;
use super::record::TransactionRecord;
use crate::error::{PassbookError, PassbookResult};

/// Outcome of an accepted deposit or withdrawal
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// The record appended to the history
    pub record: TransactionRecord,
    /// Balance after the transaction
    pub balance: Amount,
}

/// In-memory balance and transaction history of one account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    balance: Amount,
    balance_history: Vec<Amount>,
    deposit_history: Vec<TransactionRecord>,
    withdrawal_history: Vec<TransactionRecord>,
}

impl Ledger {
    /// Create an empty ledger with a zero balance
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassemble a ledger from persisted parts
    ///
    /// No invariant is checked here; codecs validate what they need.
    pub fn from_parts(
        balance: Amount,
        balance_history: Vec<Amount>,
        deposit_history: Vec<TransactionRecord>,
        withdrawal_history: Vec<TransactionRecord>,
    ) -> Self {
        Self {
            balance,
            balance_history,
            deposit_history,
            withdrawal_history,
        }
    }

    /// Assign the balance directly and record the snapshot
    ///
    /// There is no floor: a negative opening balance is accepted.
    pub fn set_balance(&mut self, balance: Amount) {
        self.balance = balance;
        self.balance_history.push(balance);
    }

    /// Add a positive amount to the balance
    pub fn deposit(&mut self, amount: Amount, clock: &dyn Clock) -> PassbookResult<Receipt> {
        if !amount.is_finite() || !amount.is_positive() {
            return Err(PassbookError::InvalidAmount(format!(
                "deposit must be greater than zero, got {}",
                amount
            )));
        }

        self.balance += amount;
        self.balance_history.push(self.balance);

        let record = TransactionRecord::deposit(clock.now(), amount);
        self.deposit_history.push(record.clone());

        Ok(Receipt {
            record,
            balance: self.balance,
        })
    }

    /// Take a positive amount no larger than the balance
    pub fn withdraw(&mut self, amount: Amount, clock: &dyn Clock) -> PassbookResult<Receipt> {
        if !amount.is_finite() || !amount.is_positive() {
            return Err(PassbookError::InvalidAmount(format!(
                "withdrawal must be greater than zero, got {}",
                amount
            )));
        }

        if amount > self.balance {
            return Err(PassbookError::InsufficientFunds {
                requested: amount.to_string(),
                available: self.balance.to_string(),
            });
        }

        self.balance -= amount;
        self.balance_history.push(self.balance);

        let record = TransactionRecord::withdrawal(clock.now(), amount);
        self.withdrawal_history.push(record.clone());

        Ok(Receipt {
            record,
            balance: self.balance,
        })
    }

    pub fn current_balance(&self) -> Amount {
        self.balance
    }

    pub fn balance_history(&self) -> &[Amount] {
        &self.balance_history
    }

    pub fn deposit_records(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.deposit_history.iter()
    }

    pub fn withdrawal_records(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.withdrawal_history.iter()
    }

    /// Deposits followed by withdrawals; not merged by time
    pub fn all_records(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.deposit_history
            .iter()
            .chain(self.withdrawal_history.iter())
    }

    pub fn deposit_history_text(&self) -> String {
        join_lines(self.deposit_records())
    }

    pub fn withdrawal_history_text(&self) -> String {
        join_lines(self.withdrawal_records())
    }

    pub fn all_history_text(&self) -> String {
        join_lines(self.all_records())
    }

    /// Check whether the balance agrees with the last snapshot
    pub fn is_consistent(&self) -> bool {
        self.balance_history
            .last()
            .map_or(true, |last| *last == self.balance)
    }

    /// Sum of all deposits ever recorded
    pub fn total_deposited(&self) -> Amount {
        self.deposit_history.iter().map(|r| r.amount).sum()
    }

    /// Sum of all withdrawals ever recorded
    pub fn total_withdrawn(&self) -> Amount {
        self.withdrawal_history.iter().map(|r| r.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.balance_history.is_empty()
            && self.deposit_history.is_empty()
            && self.withdrawal_history.is_empty()
    }
}

fn join_lines<'a>(records: impl Iterator<Item = &'a TransactionRecord>) -> String {
    records.map(|r| format!("{}\n", r)).collect()
}
