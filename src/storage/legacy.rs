//! Legacy `bank_data.txt` layout
//!
//! ```text
//! <balance>
//! <snapshot> <snapshot> ... <snapshot>
//! <deposit record>
//! <withdrawal record>
//! ```
//!
//! There are no section markers. The reader collects numeric tokens into the
//! balance history until the first line that is not entirely numeric, then
//! sorts every remaining line into deposits or withdrawals by substring. A
//! hand-edited file that puts a number on a record line, or a word on the
//! history line, shifts that boundary.

use tracing::{debug, warn};

use crate::error::{PassbookError, PassbookResult};
use crate::models::{Amount, Ledger, RecordKind, TransactionRecord};

use super::codec::LedgerCodec;

/// Reads and writes the legacy unsectioned layout
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyCodec;

impl LedgerCodec for LegacyCodec {
    fn encode(&self, ledger: &Ledger) -> String {
        let mut out = format!("{}\n", ledger.current_balance().to_exact_string());

        for snapshot in ledger.balance_history() {
            out.push_str(&snapshot.to_exact_string());
            out.push(' ');
        }
        out.push('\n');

        for record in ledger.all_records() {
            out.push_str(&record.to_line());
            out.push('\n');
        }

        out
    }

    fn decode(&self, text: &str) -> PassbookResult<Ledger> {
        let mut lines = text.lines().enumerate().skip_while(|(_, l)| l.trim().is_empty());

        let Some((index, first)) = lines.next() else {
            return Ok(Ledger::new());
        };

        let mut tokens = first.split_whitespace();
        let balance = tokens
            .next()
            .and_then(Amount::parse_exact)
            .ok_or_else(|| PassbookError::corrupt(index + 1, "balance is not a number"))?;

        let mut history = Vec::new();
        let mut deposits = Vec::new();
        let mut withdrawals = Vec::new();

        // Anything after the balance on its own line belongs to the history
        for token in tokens {
            match Amount::parse_exact(token) {
                Some(value) => history.push(value),
                None => warn!(line = index + 1, token, "Dropping non-numeric balance snapshot"),
            }
        }

        let mut in_history = true;
        for (index, line) in lines {
            if in_history {
                if let Some(values) = numeric_tokens(line) {
                    history.extend(values);
                    continue;
                }
                in_history = false;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match RecordKind::classify(line) {
                Some(_) => match TransactionRecord::parse(line) {
                    Ok(record) => match record.kind {
                        RecordKind::Deposit => deposits.push(record),
                        RecordKind::Withdrawal => withdrawals.push(record),
                    },
                    Err(e) => warn!(line = index + 1, error = %e, "Dropping unreadable record"),
                },
                None => debug!(line = index + 1, "Dropping unclassified line"),
            }
        }

        let ledger = Ledger::from_parts(balance, history, deposits, withdrawals);
        if !ledger.is_consistent() {
            warn!(
                balance = %ledger.current_balance(),
                "Balance does not match the last balance snapshot"
            );
        }

        Ok(ledger)
    }
}

/// All tokens of the line as amounts, or None if any token is not numeric
fn numeric_tokens(line: &str) -> Option<Vec<Amount>> {
    line.split_whitespace().map(Amount::parse_exact).collect()
}
