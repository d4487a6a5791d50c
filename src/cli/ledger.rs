//! One-shot ledger commands
//!
//! Each command loads the ledger, does one thing and, if it changed the
//! ledger, saves it straight away.

use clap::ValueEnum;

use super::Session;
use crate::audit::AuditLogger;
use crate::display::{format_audit_log, format_receipt, format_rejection, format_summary};
use crate::error::{PassbookError, PassbookResult};
use crate::models::{Amount, Ledger, RecordKind};
use crate::storage::LedgerStore;

/// Which records `history` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HistoryKind {
    Deposits,
    Withdrawals,
    #[default]
    All,
}

/// Create the settings file and an empty data file
pub fn handle_init(session: &Session, opening_balance: Option<&str>) -> PassbookResult<()> {
    let opening_balance = opening_balance.map(parse_amount).transpose()?;

    session.paths.ensure_directories()?;
    if !session.paths.is_initialized() {
        session.settings.save(&session.paths)?;
    }

    if session.store.exists() {
        println!("Data file already exists: {}", session.store.location());
        return Ok(());
    }

    let mut service = session.service(Ledger::new());
    if let Some(balance) = opening_balance {
        service.set_balance(balance);
    }
    session.store.init(service.ledger())?;

    println!("Created ledger at: {}", session.store.location());
    println!(
        "Opening balance: {}",
        service.current_balance().format_with_symbol(session.currency_symbol())
    );
    Ok(())
}

pub fn handle_deposit(session: &Session, amount: &str) -> PassbookResult<()> {
    handle_transaction(session, RecordKind::Deposit, amount)
}

pub fn handle_withdraw(session: &Session, amount: &str) -> PassbookResult<()> {
    handle_transaction(session, RecordKind::Withdrawal, amount)
}

fn handle_transaction(session: &Session, kind: RecordKind, amount: &str) -> PassbookResult<()> {
    let amount = parse_amount(amount)?;
    let mut service = session.open()?;

    let result = match kind {
        RecordKind::Deposit => service.deposit(amount),
        RecordKind::Withdrawal => service.withdraw(amount),
    };
    let receipt = result.map_err(|e| {
        if e.is_rejected_amount() {
            PassbookError::Validation(format_rejection(kind, &e))
        } else {
            e
        }
    })?;

    service.save()?;
    println!("{}", format_receipt(&receipt, session.currency_symbol()));
    Ok(())
}

pub fn handle_balance(session: &Session) -> PassbookResult<()> {
    let service = session.open()?;
    print!("{}", format_summary(service.ledger(), session.currency_symbol()));
    Ok(())
}

pub fn handle_history(session: &Session, kind: HistoryKind) -> PassbookResult<()> {
    let service = session.open()?;
    let ledger = service.ledger();

    let text = match kind {
        HistoryKind::Deposits => ledger.deposit_history_text(),
        HistoryKind::Withdrawals => ledger.withdrawal_history_text(),
        HistoryKind::All => ledger.all_history_text(),
    };

    if text.is_empty() {
        println!("No transactions recorded.");
    } else {
        print!("{}", text);
    }
    Ok(())
}

pub fn handle_audit(session: &Session, limit: Option<usize>) -> PassbookResult<()> {
    let logger = AuditLogger::new(session.paths.audit_log());
    let entries = match limit {
        Some(n) => logger.read_recent(n)?,
        None => logger.read_all()?,
    };

    print!("{}", format_audit_log(&entries));
    Ok(())
}

pub fn handle_config(session: &Session) -> PassbookResult<()> {
    let settings = &session.settings;

    println!("Passbook Configuration");
    println!("======================");
    println!("Base directory: {}", session.paths.base_dir().display());
    println!("Settings file:  {}", session.paths.settings_file().display());
    println!("Data file:      {}", session.store.location());
    println!("Audit log:      {}", session.paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  File format:     {}", settings.file_format);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Audit enabled:   {}", settings.audit_enabled);
    Ok(())
}

fn parse_amount(raw: &str) -> PassbookResult<Amount> {
    Amount::parse(raw)
        .map_err(|e| PassbookError::Validation(format!("Invalid amount '{}': {}", raw, e)))
}
