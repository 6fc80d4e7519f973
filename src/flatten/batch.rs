use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{info, warn};
use walkdir::WalkDir;

use super::flattener::flatten_record;
use crate::parsers::parse_call_record_file;

/// Extension of standalone call-detail record documents
pub const CDR_EXTENSION: &str = "json";

/// Outcome of a batch flatten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenReport {
    pub flattened: usize,
    pub failed: usize,
}

/// List `*.json` documents directly inside `input_dir`, sorted by file name
pub fn discover_call_records(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        bail!("Call-detail record directory not found: {}", input_dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to list call-detail record directory: {}", input_dir.display())
        })?;
        let is_cdr = entry.path().extension().is_some_and(|ext| ext == CDR_EXTENSION);
        if is_cdr && entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Flatten every call-detail record in `input_dir`, writing one JSON summary per line
///
/// Documents that cannot be read or decoded are logged and skipped. Output
/// order follows the sorted file listing, so the same input directory always
/// produces the same output bytes.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or the output cannot be written.
pub fn flatten_directory<W: Write>(input_dir: &Path, out: &mut W) -> Result<FlattenReport> {
    let mut report = FlattenReport::default();

    for path in discover_call_records(input_dir)? {
        let record = match parse_call_record_file(&path) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping call-detail record: {:#}", e);
                report.failed += 1;
                continue;
            }
        };

        let line = serde_json::to_string(&flatten_record(&record))
            .context("Failed to serialize flattened summary")?;
        writeln!(out, "{}", line).context("Failed to write flattened summary")?;
        report.flattened += 1;
    }

    out.flush().context("Failed to flush flattened output")?;
    info!(
        "Flattened {} call-detail records from {} ({} skipped)",
        report.flattened,
        input_dir.display(),
        report.failed
    );

    Ok(report)
}
