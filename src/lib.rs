//! Passbook - single-account bank ledger for the terminal
//!
//! This library provides the core of the Passbook application: one account
//! balance with its balance snapshots and the deposits and withdrawals that
//! produced them, persisted to a flat text file between sessions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The ledger, transaction records, amounts and clocks
//! - `storage`: Data file codecs and the `LedgerStore` abstraction
//! - `services`: Ledger service binding the ledger to storage and audit
//! - `audit`: Audit logging system
//! - `display`: Text formatting for the terminal
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Interactive menu and one-shot command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use passbook::config::{PassbookPaths, Settings};
//! use passbook::cli::Session;
//!
//! let paths = PassbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let session = Session::new(paths, settings, None);
//! let mut service = session.open()?;
//! service.deposit(passbook::models::Amount::new(100.0))?;
//! service.save()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::PassbookError;
