//! Configuration module for Passbook
//!
//! This module provides configuration management including:
//! - Base directory and data file resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PassbookPaths;
pub use settings::{FileFormat, Settings};
