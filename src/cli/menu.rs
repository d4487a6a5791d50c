//! Interactive menu
//!
//! Reads selections and amounts line by line from any `BufRead` and writes
//! prompts to any `Write`, so the loop can be driven from tests.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::display::{format_balance, format_menu, format_receipt, format_rejection};
use crate::error::PassbookResult;
use crate::models::{Amount, Clock, RecordKind};
use crate::services::LedgerService;
use crate::storage::LedgerStore;

/// Options of the main menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    MakeDeposit = 1,
    MakeWithdrawal,
    DepositHistory,
    WithdrawalHistory,
    AllHistory,
    CheckBalance,
    Exit,
}

impl MenuSelection {
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::MakeDeposit),
            2 => Some(Self::MakeWithdrawal),
            3 => Some(Self::DepositHistory),
            4 => Some(Self::WithdrawalHistory),
            5 => Some(Self::AllHistory),
            6 => Some(Self::CheckBalance),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// How the menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The user chose Exit; `saved` tells whether the ledger reached the store
    Exited { saved: bool },
    /// Input ran out before Exit; nothing was saved
    EndOfInput,
}

const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.";

/// Run the menu until Exit or end of input
///
/// The ledger is loaded through `open` once the user has given a name; a load
/// failure ends the menu with that error.
pub fn run_menu<S, C, R, W, F>(
    open: F,
    mut input: R,
    mut output: W,
    symbol: &str,
) -> PassbookResult<MenuOutcome>
where
    S: LedgerStore,
    C: Clock,
    R: BufRead,
    W: Write,
    F: FnOnce() -> PassbookResult<LedgerService<S, C>>,
{
    writeln!(output, "Welcome to our Bank Management System")?;
    write!(output, "Enter your name: ")?;
    output.flush()?;

    let Some(name) = read_line(&mut input)? else {
        return Ok(MenuOutcome::EndOfInput);
    };

    let mut service = open()?;

    loop {
        write!(output, "{}", format_menu(&name, service.current_balance(), symbol))?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(MenuOutcome::EndOfInput);
        };

        let Ok(number) = line.parse::<u32>() else {
            writeln!(output, "{}", INVALID_NUMBER)?;
            continue;
        };

        let Some(selection) = MenuSelection::from_number(number) else {
            writeln!(output, "Invalid selection. Please try again.")?;
            continue;
        };

        match selection {
            MenuSelection::MakeDeposit | MenuSelection::MakeWithdrawal => {
                let kind = if selection == MenuSelection::MakeDeposit {
                    RecordKind::Deposit
                } else {
                    RecordKind::Withdrawal
                };

                write!(output, "Enter your {}: ", kind.label().to_lowercase())?;
                output.flush()?;

                let Some(raw) = read_line(&mut input)? else {
                    return Ok(MenuOutcome::EndOfInput);
                };

                let Ok(amount) = Amount::parse(&raw) else {
                    writeln!(output, "{}", INVALID_NUMBER)?;
                    continue;
                };

                let result = match kind {
                    RecordKind::Deposit => service.deposit(amount),
                    RecordKind::Withdrawal => service.withdraw(amount),
                };

                match result {
                    Ok(receipt) => writeln!(output, "{}", format_receipt(&receipt, symbol))?,
                    Err(e) if e.is_rejected_amount() => {
                        writeln!(output, "{}", format_rejection(kind, &e))?
                    }
                    Err(e) => return Err(e),
                }
            }
            MenuSelection::DepositHistory => {
                writeln!(output, "{}", service.ledger().deposit_history_text())?
            }
            MenuSelection::WithdrawalHistory => {
                writeln!(output, "{}", service.ledger().withdrawal_history_text())?
            }
            MenuSelection::AllHistory => {
                writeln!(output, "{}", service.ledger().all_history_text())?
            }
            MenuSelection::CheckBalance => {
                writeln!(output, "{}", format_balance(service.current_balance(), symbol))?
            }
            MenuSelection::Exit => {
                let saved = match service.save() {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(error = %e, "Session history was not saved");
                        writeln!(
                            output,
                            "Error opening file for writing: {}",
                            service.store().location()
                        )?;
                        false
                    }
                };

                writeln!(
                    output,
                    "Thank you for using the banking program. Your final balance is: {}",
                    service.current_balance().format_with_symbol(symbol)
                )?;
                output.flush()?;

                return Ok(MenuOutcome::Exited { saved });
            }
        }
    }
}

/// Next line without its terminator, or None at end of input
fn read_line<R: BufRead>(input: &mut R) -> PassbookResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileFormat;
    use crate::models::{FixedClock, Ledger};
    use crate::storage::MemoryStore;
    use std::io::Cursor;

    fn clock() -> FixedClock {
        FixedClock::parse("10/16/2026 09:30:00").unwrap()
    }

    fn run(store: &MemoryStore, script: &str) -> (MenuOutcome, String) {
        let mut output = Vec::new();
        let outcome = run_menu(
            || LedgerService::open(store, clock()),
            Cursor::new(script),
            &mut output,
            "$",
        )
        .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    fn empty_store() -> MemoryStore {
        let store = MemoryStore::new(FileFormat::Sectioned);
        store.save(&Ledger::new()).unwrap();
        store
    }

    #[test]
    fn test_selection_numbers() {
        assert_eq!(MenuSelection::from_number(1), Some(MenuSelection::MakeDeposit));
        assert_eq!(MenuSelection::from_number(7), Some(MenuSelection::Exit));
        assert_eq!(MenuSelection::from_number(0), None);
        assert_eq!(MenuSelection::from_number(8), None);
        assert_eq!(MenuSelection::Exit as u32, 7);
    }

    #[test]
    fn test_scenario_session() {
        let store = empty_store();
        let (outcome, output) = run(&store, "Ada\n1\n100\n2\n40\n2\n1000\n6\n7\n");

        assert_eq!(outcome, MenuOutcome::Exited { saved: true });
        assert!(output.contains("Welcome Ada"));
        assert!(output.contains(
            "Deposit successful. 10/16/2026 09:30:00 Deposit: 100.00. Your new balance is: $100.00"
        ));
        assert!(output.contains(
            "Withdrawal successful. 10/16/2026 09:30:00 Withdrawal: 40.00. Your new balance is: $60.00"
        ));
        assert!(output.contains("Invalid withdrawal amount or insufficient funds."));
        assert!(output.contains("Your current balance is: $60.00"));
        assert!(output.contains("Your final balance is: $60.00"));

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.current_balance(), Amount::new(60.0));
        assert_eq!(reloaded.deposit_records().count(), 1);
        assert_eq!(reloaded.withdrawal_records().count(), 1);
    }

    #[test]
    fn test_invalid_input_keeps_looping() {
        let store = empty_store();
        let (outcome, output) = run(&store, "Ada\nabc\n9\n1\nten\n1\n0\n7\n");

        assert_eq!(outcome, MenuOutcome::Exited { saved: true });
        assert_eq!(output.matches(INVALID_NUMBER).count(), 2);
        assert!(output.contains("Invalid selection. Please try again."));
        assert!(output.contains("Invalid deposit amount."));
        assert_eq!(store.load().unwrap(), Ledger::new());
    }

    #[test]
    fn test_history_options() {
        let store = empty_store();
        let (_, output) = run(&store, "Ada\n1\n5\n1\n7\n2\n3\n5\n7\n");

        let all = "10/16/2026 09:30:00 Deposit: 5.00\n\
                   10/16/2026 09:30:00 Deposit: 7.00\n\
                   10/16/2026 09:30:00 Withdrawal: 3.00\n";
        assert!(output.contains(all));
    }

    #[test]
    fn test_end_of_input_does_not_save() {
        let store = empty_store();
        let (outcome, _) = run(&store, "Ada\n1\n50\n");

        assert_eq!(outcome, MenuOutcome::EndOfInput);
        assert_eq!(store.load().unwrap().current_balance(), Amount::zero());
    }

    #[test]
    fn test_failed_save_still_reports_balance() {
        struct ReadOnlyStore(MemoryStore);

        impl LedgerStore for ReadOnlyStore {
            fn load(&self) -> PassbookResult<Ledger> {
                self.0.load()
            }

            fn save(&self, _ledger: &Ledger) -> PassbookResult<()> {
                Err(crate::error::PassbookError::Storage("read-only".into()))
            }

            fn location(&self) -> String {
                "read-only.txt".into()
            }
        }

        let store = ReadOnlyStore(empty_store());
        let mut output = Vec::new();
        let outcome = run_menu(
            || LedgerService::open(store, clock()),
            Cursor::new("Ada\n1\n25\n7\n"),
            &mut output,
            "$",
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(outcome, MenuOutcome::Exited { saved: false });
        assert!(output.contains("Error opening file for writing: read-only.txt"));
        assert!(output.contains("Your final balance is: $25.00"));
    }

    #[test]
    fn test_name_is_asked_before_loading() {
        let store = MemoryStore::new(FileFormat::Sectioned);
        let mut output = Vec::new();
        let err = run_menu(
            || LedgerService::open(&store, clock()),
            Cursor::new("Ada\n7\n"),
            &mut output,
            "$",
        )
        .unwrap_err();
        let output = String::from_utf8(output).unwrap();

        assert!(err.is_fatal_load());
        assert_eq!(output, "Welcome to our Bank Management System\nEnter your name: ");
    }

    #[test]
    fn test_end_of_input_before_name_does_not_load() {
        let mut output = Vec::new();
        let outcome = run_menu(
            || -> PassbookResult<LedgerService<MemoryStore, FixedClock>> {
                panic!("ledger loaded without a name")
            },
            Cursor::new(""),
            &mut output,
            "$",
        )
        .unwrap();
        assert_eq!(outcome, MenuOutcome::EndOfInput);
    }

    #[test]
    fn test_sub_cent_deposit_reloads_in_both_layouts() {
        for format in [FileFormat::Sectioned, FileFormat::Legacy] {
            let store = MemoryStore::new(format);
            store.save(&Ledger::new()).unwrap();

            let (outcome, _) = run(&store, "Ada\n1\n100\n1\n0.001\n7\n");
            assert_eq!(outcome, MenuOutcome::Exited { saved: true });

            let reloaded = store.load().unwrap();
            assert_eq!(reloaded.deposit_records().count(), 2);
            assert_eq!(reloaded.current_balance(), Amount::new(100.0 + 0.001));
            assert!(store.text().unwrap().contains("Deposit: 0.001"));
        }
    }
}
