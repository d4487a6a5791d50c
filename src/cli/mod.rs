//! CLI command handlers
//!
//! The interactive menu and the one-shot commands all run against a
//! `Session`: resolved paths, settings and the data file store.

pub mod export;
pub mod ledger;
pub mod menu;

pub use export::{handle_export, ExportFormat};
pub use ledger::{
    handle_audit, handle_balance, handle_config, handle_deposit, handle_history, handle_init,
    handle_withdraw, HistoryKind,
};
pub use menu::{run_menu, MenuOutcome, MenuSelection};

use std::path::PathBuf;

use crate::audit::AuditLogger;
use crate::config::{PassbookPaths, Settings};
use crate::error::PassbookResult;
use crate::models::{Ledger, SystemClock};
use crate::services::LedgerService;
use crate::storage::{FileStore, LedgerStore};

/// Everything a command needs to find and open the ledger
#[derive(Debug, Clone)]
pub struct Session {
    pub paths: PassbookPaths,
    pub settings: Settings,
    pub store: FileStore,
}

impl Session {
    /// Resolve the data file from `data_file`, falling back to the settings
    pub fn new(paths: PassbookPaths, settings: Settings, data_file: Option<PathBuf>) -> Self {
        let path = data_file.unwrap_or_else(|| settings.resolve_data_file(&paths));
        let store = FileStore::new(path, settings.file_format);
        Self {
            paths,
            settings,
            store,
        }
    }

    /// Load the ledger; a missing or corrupt data file is an error
    pub fn open(&self) -> PassbookResult<LedgerService<FileStore>> {
        let ledger = self.store.load()?;
        Ok(self.service(ledger))
    }

    /// Wrap `ledger` in a service bound to this session's store and audit log
    pub fn service(&self, ledger: Ledger) -> LedgerService<FileStore> {
        let service = LedgerService::from_ledger(ledger, self.store.clone(), SystemClock);
        match self.audit_logger() {
            Some(logger) => service.with_audit(logger),
            None => service,
        }
    }

    pub fn audit_logger(&self) -> Option<AuditLogger> {
        self.settings
            .audit_enabled
            .then(|| AuditLogger::new(self.paths.audit_log()))
    }

    pub fn currency_symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}
