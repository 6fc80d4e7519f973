use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::CallDetailRecord;

/// Parse a call-detail record from a JSON string
pub fn parse_call_record(json: &str) -> Result<CallDetailRecord> {
    serde_json::from_str(json).context("Failed to parse call-detail record")
}

/// Parse a standalone call-detail record document (one JSON object per file)
pub fn parse_call_record_file(path: &Path) -> Result<CallDetailRecord> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open call-detail record: {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse call-detail record: {}", path.display()))
}
