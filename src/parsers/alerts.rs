use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::models::AlertRecord;

/// Per-shard parse counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShardStats {
    pub records: usize,
    pub malformed_lines: usize,
    /// The shard hit an I/O error before its end
    pub aborted: bool,
}

/// Decode one shard line.
///
/// Returns `Ok(None)` for blank lines. Surrounding whitespace (including a
/// trailing `\r`) is ignored.
pub fn parse_alert_line(line: &[u8]) -> Result<Option<AlertRecord>, serde_json::Error> {
    let trimmed = line.trim_ascii();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(trimmed).map(Some)
}

/// Lazy reader over the alert records of one shard file.
///
/// Malformed lines are logged and skipped. The underlying file handle is
/// released as soon as the shard is exhausted or a read error occurs.
pub struct ShardReader {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    buf: Vec<u8>,
    line_num: usize,
    stats: ShardStats,
}

impl ShardReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open shard: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            reader: Some(BufReader::new(file)),
            buf: Vec::new(),
            line_num: 0,
            stats: ShardStats::default(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stats(&self) -> ShardStats {
        self.stats
    }

    /// Whether the file handle is still held
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    fn finish(&mut self) {
        // Dropping the reader closes the file
        self.reader = None;

        let ShardStats { records, malformed_lines, .. } = self.stats;
        if malformed_lines == 0 {
            return;
        }

        warn!(
            "Parsed {}: {} records ({} malformed lines skipped)",
            self.path.display(),
            records,
            malformed_lines
        );

        let total = records + malformed_lines;
        if malformed_lines * 2 > total {
            warn!(
                "More than half of the lines in {} failed to parse ({:.1}%) - shard may be corrupted",
                self.path.display(),
                (malformed_lines as f64 / total as f64) * 100.0
            );
        }
    }
}

impl Iterator for ShardReader {
    type Item = AlertRecord;

    fn next(&mut self) -> Option<AlertRecord> {
        loop {
            let reader = self.reader.as_mut()?;
            self.buf.clear();

            match reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.finish();
                    return None;
                }
                Ok(_) => {
                    self.line_num += 1;
                    match parse_alert_line(&self.buf) {
                        Ok(Some(record)) => {
                            self.stats.records += 1;
                            return Some(record);
                        }
                        Ok(None) => {
                            debug!("Skipping blank line {} in {}", self.line_num, self.path.display());
                        }
                        Err(e) => {
                            warn!(
                                "Failed to parse line {} in {}: {}",
                                self.line_num,
                                self.path.display(),
                                e
                            );
                            self.stats.malformed_lines += 1;
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        "Abandoning shard {} after line {}: {}",
                        self.path.display(),
                        self.line_num,
                        e
                    );
                    self.stats.aborted = true;
                    self.finish();
                    return None;
                }
            }
        }
    }
}

/// Parse a whole shard eagerly, returning its records in file order
pub fn parse_shard_file(path: &Path) -> Result<(Vec<AlertRecord>, ShardStats)> {
    let mut reader = ShardReader::open(path)?;
    let records: Vec<AlertRecord> = reader.by_ref().collect();
    Ok((records, reader.stats()))
}
