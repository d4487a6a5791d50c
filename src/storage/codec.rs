//! Ledger text codecs
//!
//! A ledger file is plain text in one of two layouts. Writing always uses the
//! configured layout; reading detects the layout from the first line.

use crate::config::FileFormat;
use crate::error::PassbookResult;
use crate::models::Ledger;

use super::legacy::LegacyCodec;
use super::sectioned::{SectionedCodec, SECTIONED_HEADER};

/// Converts a ledger to and from its on-disk text
pub trait LedgerCodec {
    fn encode(&self, ledger: &Ledger) -> String;

    fn decode(&self, text: &str) -> PassbookResult<Ledger>;
}

/// Codec that writes the given format
pub fn codec_for(format: FileFormat) -> &'static dyn LedgerCodec {
    match format {
        FileFormat::Sectioned => &SectionedCodec,
        FileFormat::Legacy => &LegacyCodec,
    }
}

/// Guess the layout of existing file contents
pub fn detect_format(text: &str) -> FileFormat {
    let first = text.lines().map(str::trim).find(|l| !l.is_empty());
    if first == Some(SECTIONED_HEADER) {
        FileFormat::Sectioned
    } else {
        FileFormat::Legacy
    }
}

/// Decode text in whichever layout it was written
pub fn decode_any(text: &str) -> PassbookResult<Ledger> {
    codec_for(detect_format(text)).decode(text)
}
