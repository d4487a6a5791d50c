//! Sectioned ledger layout
//!
//! ```text
//! passbook-ledger v1
//! [balance]
//! 60
//! [balance_history]
//! 100
//! 60
//! [deposits]
//! 10/16/2026 09:30:00 Deposit: 100.00
//! [withdrawals]
//! 10/16/2026 09:31:00 Withdrawal: 40.00
//! ```
//!
//! Every value sits under an explicit section marker, so decoding never has to
//! guess where one list ends. Anything unexpected is reported as corrupt.

use crate::error::{PassbookError, PassbookResult};
use crate::models::{Amount, Ledger, RecordKind, TransactionRecord};

use super::codec::LedgerCodec;

/// First line of every sectioned file
pub const SECTIONED_HEADER: &str = "passbook-ledger v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Balance,
    BalanceHistory,
    Deposits,
    Withdrawals,
}

impl Section {
    const ALL: [Section; 4] = [
        Section::Balance,
        Section::BalanceHistory,
        Section::Deposits,
        Section::Withdrawals,
    ];

    fn name(self) -> &'static str {
        match self {
            Section::Balance => "balance",
            Section::BalanceHistory => "balance_history",
            Section::Deposits => "deposits",
            Section::Withdrawals => "withdrawals",
        }
    }

    fn from_marker(line: &str) -> Option<Option<Self>> {
        let name = line.strip_prefix('[')?.strip_suffix(']')?;
        Some(Self::ALL.into_iter().find(|s| s.name() == name.trim()))
    }
}

/// Reads and writes the sectioned layout
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionedCodec;

impl LedgerCodec for SectionedCodec {
    fn encode(&self, ledger: &Ledger) -> String {
        let mut out = String::new();
        out.push_str(SECTIONED_HEADER);
        out.push('\n');

        push_marker(&mut out, Section::Balance);
        out.push_str(&ledger.current_balance().to_exact_string());
        out.push('\n');

        push_marker(&mut out, Section::BalanceHistory);
        for snapshot in ledger.balance_history() {
            out.push_str(&snapshot.to_exact_string());
            out.push('\n');
        }

        push_marker(&mut out, Section::Deposits);
        for record in ledger.deposit_records() {
            out.push_str(&record.to_line());
            out.push('\n');
        }

        push_marker(&mut out, Section::Withdrawals);
        for record in ledger.withdrawal_records() {
            out.push_str(&record.to_line());
            out.push('\n');
        }

        out
    }

    fn decode(&self, text: &str) -> PassbookResult<Ledger> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        match lines.next() {
            Some((_, SECTIONED_HEADER)) => {}
            Some((line, _)) => return Err(PassbookError::corrupt(line, "missing ledger header")),
            None => return Err(PassbookError::corrupt(1, "file is empty")),
        }

        let mut seen: Vec<Section> = Vec::new();
        let mut current: Option<Section> = None;
        let mut balance: Option<(usize, Amount)> = None;
        let mut history = Vec::new();
        let mut deposits = Vec::new();
        let mut withdrawals = Vec::new();

        for (line, content) in lines {
            if let Some(marker) = Section::from_marker(content) {
                let section = marker.ok_or_else(|| {
                    PassbookError::corrupt(line, format!("unknown section {}", content))
                })?;
                if seen.contains(&section) {
                    return Err(PassbookError::corrupt(
                        line,
                        format!("section [{}] appears twice", section.name()),
                    ));
                }
                seen.push(section);
                current = Some(section);
                continue;
            }

            match current {
                None => {
                    return Err(PassbookError::corrupt(line, "value outside of any section"));
                }
                Some(Section::Balance) => {
                    if balance.is_some() {
                        return Err(PassbookError::corrupt(line, "more than one balance"));
                    }
                    balance = Some((line, parse_amount(line, content)?));
                }
                Some(Section::BalanceHistory) => history.push(parse_amount(line, content)?),
                Some(Section::Deposits) => {
                    deposits.push(parse_record(line, content, RecordKind::Deposit)?)
                }
                Some(Section::Withdrawals) => {
                    withdrawals.push(parse_record(line, content, RecordKind::Withdrawal)?)
                }
            }
        }

        let (balance_line, balance) =
            balance.ok_or_else(|| PassbookError::corrupt(1, "missing [balance] section"))?;

        let ledger = Ledger::from_parts(balance, history, deposits, withdrawals);
        if !ledger.is_consistent() {
            return Err(PassbookError::corrupt(
                balance_line,
                "balance does not match the last balance snapshot",
            ));
        }

        Ok(ledger)
    }
}

fn push_marker(out: &mut String, section: Section) {
    out.push('[');
    out.push_str(section.name());
    out.push_str("]\n");
}

fn parse_amount(line: usize, content: &str) -> PassbookResult<Amount> {
    Amount::parse_exact(content)
        .ok_or_else(|| PassbookError::corrupt(line, format!("not a number: {}", content)))
}

fn parse_record(line: usize, content: &str, expected: RecordKind) -> PassbookResult<TransactionRecord> {
    let record =
        TransactionRecord::parse(content).map_err(|e| PassbookError::corrupt(line, e.to_string()))?;

    if record.kind != expected {
        return Err(PassbookError::corrupt(
            line,
            format!("{} record in the {} section", record.kind, expected),
        ));
    }

    Ok(record)
}
