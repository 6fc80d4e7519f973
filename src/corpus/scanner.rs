use std::path::{Path, PathBuf};
use std::vec;

use log::{info, warn};
use rayon::prelude::*;

use super::discovery::{SHARD_EXTENSION, discover_shards};
use super::error::CorpusError;
use crate::models::AlertRecord;
use crate::parsers::{ShardReader, ShardStats, parse_shard_file};

/// Aggregate counters for one pass over a corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub shards_scanned: usize,
    /// Shards that could not be opened or were abandoned on a read error
    pub shards_failed: usize,
    pub records_parsed: usize,
    pub malformed_lines: usize,
}

impl ScanStats {
    fn record_shard(&mut self, shard: ShardStats) {
        self.shards_scanned += 1;
        self.records_parsed += shard.records;
        self.malformed_lines += shard.malformed_lines;
        if shard.aborted {
            self.shards_failed += 1;
        }
    }

    fn record_unopenable_shard(&mut self) {
        self.shards_scanned += 1;
        self.shards_failed += 1;
    }
}

/// Scanner over a directory of line-delimited alert shards
///
/// The corpus location is always passed in explicitly, so several corpora can
/// be scanned from the same process. Every call to [`CorpusScanner::records`]
/// starts a fresh pass; nothing is cached between scans.
#[derive(Debug, Clone)]
pub struct CorpusScanner {
    corpus_dir: PathBuf,
    extension: String,
}

impl CorpusScanner {
    pub fn new(corpus_dir: impl Into<PathBuf>) -> Self {
        Self { corpus_dir: corpus_dir.into(), extension: SHARD_EXTENSION.to_string() }
    }

    /// Use a shard extension other than `jsonl`
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn corpus_dir(&self) -> &Path {
        &self.corpus_dir
    }

    pub fn shards(&self) -> Result<Vec<PathBuf>, CorpusError> {
        discover_shards(&self.corpus_dir, &self.extension)
    }

    /// Lazily iterate over every record in every shard
    ///
    /// Shards are opened one at a time and closed as soon as they are consumed.
    ///
    /// # Errors
    ///
    /// Fails only when the corpus directory itself is missing or unreadable. Problems
    /// inside individual shards are logged and counted in [`CorpusRecords::stats`].
    pub fn records(&self) -> Result<CorpusRecords, CorpusError> {
        let shards = self.shards()?;
        info!("Scanning {} shards in {}", shards.len(), self.corpus_dir.display());
        Ok(CorpusRecords { shards: shards.into_iter(), current: None, stats: ScanStats::default() })
    }

    /// Scan shards in parallel, mapping each shard's records through `per_shard`
    ///
    /// Results come back in shard order and each shard's records reach `per_shard` in file
    /// order. Shards that cannot be opened contribute `per_shard(empty)`.
    pub fn scan_parallel<T, F>(&self, per_shard: F) -> Result<(Vec<T>, ScanStats), CorpusError>
    where
        T: Send,
        F: Fn(Vec<AlertRecord>) -> T + Sync + Send,
    {
        let shards = self.shards()?;
        info!("Scanning {} shards in parallel in {}", shards.len(), self.corpus_dir.display());

        let results: Vec<(T, Option<ShardStats>)> = shards
            .par_iter()
            .map(|path| match parse_shard_file(path) {
                Ok((records, shard_stats)) => (per_shard(records), Some(shard_stats)),
                Err(e) => {
                    warn!("Skipping shard: {:#}", e);
                    (per_shard(Vec::new()), None)
                }
            })
            .collect();

        let mut stats = ScanStats::default();
        let mut outputs = Vec::with_capacity(results.len());
        for (output, shard_stats) in results {
            match shard_stats {
                Some(shard_stats) => stats.record_shard(shard_stats),
                None => stats.record_unopenable_shard(),
            }
            outputs.push(output);
        }

        Ok((outputs, stats))
    }
}

/// Lazy, single-pass iterator over all records of a corpus
pub struct CorpusRecords {
    shards: vec::IntoIter<PathBuf>,
    current: Option<ShardReader>,
    stats: ScanStats,
}

impl CorpusRecords {
    /// Counters for the shards consumed so far
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    fn open_next_shard(&mut self) -> bool {
        for path in self.shards.by_ref() {
            match ShardReader::open(&path) {
                Ok(reader) => {
                    self.current = Some(reader);
                    return true;
                }
                Err(e) => {
                    warn!("Skipping shard: {:#}", e);
                    self.stats.record_unopenable_shard();
                }
            }
        }
        false
    }
}

impl Iterator for CorpusRecords {
    type Item = AlertRecord;

    fn next(&mut self) -> Option<AlertRecord> {
        loop {
            if let Some(reader) = self.current.as_mut() {
                if let Some(record) = reader.next() {
                    return Some(record);
                }
                let shard_stats = reader.stats();
                self.stats.record_shard(shard_stats);
                self.current = None;
            }

            if !self.open_next_shard() {
                return None;
            }
        }
    }
}
