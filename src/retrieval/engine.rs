use std::path::{Path, PathBuf};

use log::{debug, info};

use super::aggregate::Aggregator;
use crate::corpus::{CorpusError, CorpusScanner, ScanStats};
use crate::filters::is_bad_call;
use crate::matcher::{FuzzyMatcher, Scorer};
use crate::models::{AlertRecord, QueryRequest, QueryResponse};

/// Retrieves bad calls for a fuzzily named user from a corpus directory
///
/// ```no_run
/// use callscope::models::QueryRequest;
/// use callscope::retrieval::RetrievalEngine;
///
/// let engine = RetrievalEngine::new("jsonl_data");
/// let response = engine.find_bad_calls(&QueryRequest::new("Jaimie Tores"));
/// println!("{}", serde_json::to_string_pretty(&response)?);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RetrievalEngine {
    scanner: CorpusScanner,
    scorer: Scorer,
    parallel: bool,
}

impl RetrievalEngine {
    pub fn new(corpus_dir: impl Into<PathBuf>) -> Self {
        Self::with_scanner(CorpusScanner::new(corpus_dir))
    }

    pub fn with_scanner(scanner: CorpusScanner) -> Self {
        Self { scanner, scorer: Scorer::default(), parallel: false }
    }

    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Scan shards on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn corpus_dir(&self) -> &Path {
        self.scanner.corpus_dir()
    }

    /// Answer one request
    ///
    /// Always returns one of the three structured outcomes; corpus and parse
    /// problems never escape as errors.
    pub fn find_bad_calls(&self, request: &QueryRequest) -> QueryResponse {
        let matcher = FuzzyMatcher::new(&request.query)
            .with_threshold(request.threshold())
            .with_scorer(self.scorer);

        let scanned = if self.parallel {
            self.collect_parallel(&matcher)
        } else {
            self.collect_sequential(&matcher)
        };

        match scanned {
            Ok((aggregator, stats)) => {
                info!(
                    "Query '{}' (threshold {}): {} bad calls from {} records in {} shards ({} malformed lines skipped)",
                    request.query,
                    matcher.threshold(),
                    aggregator.len(),
                    stats.records_parsed,
                    stats.shards_scanned,
                    stats.malformed_lines
                );
                aggregator.finish(&request.query)
            }
            Err(e) => QueryResponse::corpus_unavailable(format!(
                "{}. Please run the data generation step first.",
                e
            )),
        }
    }

    fn collect_sequential(
        &self,
        matcher: &FuzzyMatcher,
    ) -> Result<(Aggregator, ScanStats), CorpusError> {
        let mut records = self.scanner.records()?;
        let mut aggregator = Aggregator::new();
        for record in records.by_ref() {
            collect_record(matcher, &mut aggregator, record);
        }
        Ok((aggregator, records.stats()))
    }

    fn collect_parallel(
        &self,
        matcher: &FuzzyMatcher,
    ) -> Result<(Aggregator, ScanStats), CorpusError> {
        let (per_shard, stats) = self.scanner.scan_parallel(|records| {
            let mut aggregator = Aggregator::new();
            for record in records {
                collect_record(matcher, &mut aggregator, record);
            }
            aggregator
        })?;

        let mut aggregator = Aggregator::new();
        for shard in per_shard {
            aggregator.merge(shard);
        }
        Ok((aggregator, stats))
    }
}

/// Match, then filter, then aggregate a single record
fn collect_record(matcher: &FuzzyMatcher, aggregator: &mut Aggregator, record: AlertRecord) {
    if !matcher.is_match(record.display_name()) {
        return;
    }
    aggregator.accept_name(record.display_name());

    if is_bad_call(&record) {
        aggregator.push(record);
    } else {
        debug!(
            "Dropping {} severity record for '{}'",
            record.severity,
            record.display_name()
        );
    }
}

/// Convenience wrapper: sequential scan of `corpus_dir` with the default scorer
pub fn find_bad_calls(corpus_dir: &Path, request: &QueryRequest) -> QueryResponse {
    RetrievalEngine::new(corpus_dir).find_bad_calls(request)
}
