//! Ledger display formatting

use crate::audit::AuditEntry;
use crate::error::PassbookError;
use crate::models::{Amount, Ledger, Receipt, RecordKind};

/// Message shown after an accepted deposit or withdrawal
pub fn format_receipt(receipt: &Receipt, symbol: &str) -> String {
    format!(
        "{} successful. {}. Your new balance is: {}",
        receipt.record.kind,
        receipt.record,
        receipt.balance.format_with_symbol(symbol)
    )
}

/// Message shown when the ledger refused an operation
///
/// Withdrawals report bad amounts and missing funds the same way.
pub fn format_rejection(kind: RecordKind, error: &PassbookError) -> String {
    match (kind, error) {
        (RecordKind::Deposit, PassbookError::InvalidAmount(_)) => {
            "Invalid deposit amount.".to_string()
        }
        (RecordKind::Withdrawal, e) if e.is_rejected_amount() => {
            "Invalid withdrawal amount or insufficient funds.".to_string()
        }
        (_, e) => e.to_string(),
    }
}

pub fn format_balance(balance: Amount, symbol: &str) -> String {
    format!("Your current balance is: {}", balance.format_with_symbol(symbol))
}

/// Balance plus totals, for the `balance` command
pub fn format_summary(ledger: &Ledger, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Balance:          {}\n",
        ledger.current_balance().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total deposited:  {} ({} deposits)\n",
        ledger.total_deposited().format_with_symbol(symbol),
        ledger.deposit_records().count()
    ));
    output.push_str(&format!(
        "Total withdrawn:  {} ({} withdrawals)\n",
        ledger.total_withdrawn().format_with_symbol(symbol),
        ledger.withdrawal_records().count()
    ));
    output
}

/// The interactive main menu
pub fn format_menu(name: &str, balance: Amount, symbol: &str) -> String {
    format!(
        "********************************\n\
         Welcome {}\n\
         Your balance is: {}\n\
         1) Make a deposit\n\
         2) Make a withdrawal\n\
         3) Deposit History\n\
         4) Withdrawal History\n\
         5) Deposit and Withdrawal History\n\
         6) Balance\n\
         7) Exit\n",
        name,
        balance.format_with_symbol(symbol)
    )
}

pub fn format_audit_log(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries found.\n".to_string();
    }

    entries
        .iter()
        .map(|e| format!("{}\n", e.format_human_readable()))
        .collect()
}
