//! Display formatting for terminal output
//!
//! Turns ledger state, receipts and audit entries into the text printed by the
//! interactive menu and the one-shot commands.

pub mod ledger;

pub use ledger::{
    format_audit_log, format_balance, format_menu, format_receipt,
    format_rejection, format_summary,
};
