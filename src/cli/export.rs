//! CLI command for ledger export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{PassbookError, PassbookResult};
use crate::export::{csv, json, yaml};
use crate::models::Ledger;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transaction records only)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Write the ledger to `output` in the chosen format
pub fn handle_export(
    ledger: &Ledger,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> PassbookResult<()> {
    let file = File::create(&output).map_err(|e| {
        PassbookError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    write_export(ledger, &mut writer, format, pretty)?;
    writer
        .flush()
        .map_err(|e| PassbookError::Export(e.to_string()))?;

    report(&output, format, ledger);
    Ok(())
}

fn write_export<W: Write>(
    ledger: &Ledger,
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> PassbookResult<()> {
    match format {
        ExportFormat::Csv => csv::export_records_csv(ledger, writer),
        ExportFormat::Json => json::export_full_json(ledger, writer, pretty),
        ExportFormat::Yaml => yaml::export_full_yaml(ledger, writer),
    }
}

fn report(output: &Path, format: ExportFormat, ledger: &Ledger) {
    match format {
        ExportFormat::Csv => println!(
            "Exported {} records to: {}",
            ledger.all_records().count(),
            output.display()
        ),
        ExportFormat::Json | ExportFormat::Yaml => {
            println!("Full ledger exported to: {}", output.display())
        }
    }
}
