//! Storage layer for Passbook
//!
//! The ledger lives in a single text file. `LedgerStore` hides where that text
//! goes so the ledger service can run against a real file or against memory.

pub mod codec;
pub mod file_io;
pub mod legacy;
pub mod sectioned;

pub use codec::{codec_for, decode_any, detect_format, LedgerCodec};
pub use file_io::{read_text_required, write_text_atomic};
pub use legacy::LegacyCodec;
pub use sectioned::{SectionedCodec, SECTIONED_HEADER};

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::FileFormat;
use crate::error::{PassbookError, PassbookResult};
use crate::models::Ledger;

/// Somewhere a ledger can be loaded from and saved to
pub trait LedgerStore {
    fn load(&self) -> PassbookResult<Ledger>;

    fn save(&self, ledger: &Ledger) -> PassbookResult<()>;

    /// Human-readable location, for messages
    fn location(&self) -> String;
}

/// Ledger kept in a text file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: FileFormat,
}

impl FileStore {
    /// Create a store for the given file, writing in `format`
    pub fn new(path: PathBuf, format: FileFormat) -> Self {
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write `ledger` only if no data file exists yet
    ///
    /// Returns whether a file was created.
    pub fn init(&self, ledger: &Ledger) -> PassbookResult<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.save(ledger)?;
        Ok(true)
    }
}

impl LedgerStore for FileStore {
    fn load(&self) -> PassbookResult<Ledger> {
        let text = read_text_required(&self.path)?;
        let ledger = decode_any(&text)?;

        info!(
            path = %self.path.display(),
            balance = %ledger.current_balance(),
            deposits = ledger.deposit_records().count(),
            withdrawals = ledger.withdrawal_records().count(),
            "Loaded ledger"
        );

        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> PassbookResult<()> {
        let text = codec_for(self.format).encode(ledger);
        write_text_atomic(&self.path, &text)?;

        info!(path = %self.path.display(), format = %self.format, "Saved ledger");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Ledger text held in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    text: RefCell<Option<String>>,
    format: FileFormat,
}

impl MemoryStore {
    /// An empty store; loading fails until something is saved
    pub fn new(format: FileFormat) -> Self {
        Self {
            text: RefCell::new(None),
            format,
        }
    }

    /// A store pre-filled with file contents
    pub fn with_text(text: impl Into<String>, format: FileFormat) -> Self {
        Self {
            text: RefCell::new(Some(text.into())),
            format,
        }
    }

    /// The last text saved, if any
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> PassbookResult<Ledger> {
        match self.text.borrow().as_deref() {
            Some(text) => decode_any(text),
            None => Err(PassbookError::DataFileUnreadable {
                path: PathBuf::from(self.location()),
                reason: "nothing saved yet".into(),
            }),
        }
    }

    fn save(&self, ledger: &Ledger) -> PassbookResult<()> {
        let text = codec_for(self.format).encode(ledger);
        *self.text.borrow_mut() = Some(text);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn load(&self) -> PassbookResult<Ledger> {
        (**self).load()
    }

    fn save(&self, ledger: &Ledger) -> PassbookResult<()> {
        (**self).save(ledger)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, FixedClock};
    use tempfile::TempDir;

    fn scenario_ledger() -> Ledger {
        let clock = FixedClock::parse("10/16/2026 09:30:00").unwrap();
        let mut ledger = Ledger::new();
        ledger.deposit(Amount::new(100.0), &clock).unwrap();
        ledger.withdraw(Amount::new(40.0), &clock).unwrap();
        ledger
    }

    #[test]
    fn test_file_store_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("bank_data.txt"), FileFormat::Sectioned);

        let err = store.load().unwrap_err();
        assert!(err.is_fatal_load());
    }

    #[test]
    fn test_file_store_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bank_data.txt");

        let ledger = scenario_ledger();
        FileStore::new(path.clone(), FileFormat::Sectioned)
            .save(&ledger)
            .unwrap();

        let reloaded = FileStore::new(path, FileFormat::Sectioned).load().unwrap();
        assert_eq!(reloaded, ledger);
    }

    #[test]
    fn test_file_store_reads_legacy_writes_configured() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bank_data.txt");
        std::fs::write(&path, "60\n100 60 \n10/16/2026 09:30:00 Deposit: 100.000000\n").unwrap();

        let store = FileStore::new(path.clone(), FileFormat::Sectioned);
        let ledger = store.load().unwrap();
        assert_eq!(ledger.current_balance(), Amount::new(60.0));

        store.save(&ledger).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(SECTIONED_HEADER));
    }

    #[test]
    fn test_file_store_init_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("bank_data.txt"), FileFormat::Legacy);

        assert!(store.init(&scenario_ledger()).unwrap());
        assert!(!store.init(&Ledger::new()).unwrap());
        assert_eq!(store.load().unwrap().current_balance(), Amount::new(60.0));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new(FileFormat::Legacy);
        assert!(store.load().is_err());

        store.save(&scenario_ledger()).unwrap();
        assert!(store.text().unwrap().starts_with("60\n"));
        assert_eq!(store.load().unwrap(), scenario_ledger());
    }

    #[test]
    fn test_memory_store_with_corrupt_text() {
        let store = MemoryStore::with_text("passbook-ledger v1\n[balance]\nabc\n", FileFormat::Sectioned);
        assert!(matches!(store.load(), Err(PassbookError::Corrupt { .. })));
    }
}
