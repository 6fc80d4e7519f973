use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::corpus::CorpusScanner;
use crate::flatten::flatten_directory;
use crate::generator::{GeneratorConfig, generate_corpus};
use crate::matcher::Scorer;
use crate::models::{DEFAULT_SIMILARITY_THRESHOLD, QueryRequest, Severity};
use crate::retrieval::RetrievalEngine;
use crate::utils::{DEFAULT_FLATTEN_OUTPUT, format_path_with_tilde, get_cdr_dir, get_corpus_dir};

#[derive(Parser)]
#[command(name = "callscope")]
#[command(version)]
#[command(about = "Inspect call-quality telemetry and find bad calls by user name", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find Medium/High severity calls for a fuzzily matched user name
    Find {
        /// User name as typed, misspellings allowed
        query: String,
        /// Minimum similarity score (0-100) for a name to match
        #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: u8,
        #[arg(long, value_enum, default_value_t = Scorer::Ratio)]
        scorer: Scorer,
        /// Scan shards on all cores
        #[arg(long)]
        parallel: bool,
        /// Alert corpus directory [env: CALLSCOPE_CORPUS_DIR] [default: jsonl_data]
        #[arg(long)]
        corpus_dir: Option<PathBuf>,
    },
    /// Answer one JSON request read from stdin
    Tool {
        #[arg(long)]
        corpus_dir: Option<PathBuf>,
    },
    /// Flatten a directory of call-detail records into line-delimited summaries
    Flatten {
        /// Directory of *.json records [env: CALLSCOPE_CDR_DIR] [default: created_json]
        #[arg(long)]
        input_dir: Option<PathBuf>,
        #[arg(long, default_value = DEFAULT_FLATTEN_OUTPUT)]
        output: PathBuf,
    },
    /// Write a synthetic alert corpus
    Generate {
        /// Defaults to the corpus directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
        #[arg(long, default_value_t = 50)]
        files: usize,
        #[arg(long, default_value_t = 25)]
        records: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show statistics about the alert corpus
    Stats {
        #[arg(long)]
        corpus_dir: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Find { query, threshold, scorer, parallel, corpus_dir }) => {
            let engine = RetrievalEngine::new(get_corpus_dir(corpus_dir.as_deref()))
                .with_scorer(scorer)
                .with_parallel(parallel);
            let request = QueryRequest::new(query).with_threshold(threshold);
            let response = engine.find_bad_calls(&request);
            let rendered =
                serde_json::to_string_pretty(&response).context("Failed to serialize response")?;
            println!("{}", rendered);
        }
        Some(Commands::Tool { corpus_dir }) => {
            answer_tool_request(&get_corpus_dir(corpus_dir.as_deref()))?;
        }
        Some(Commands::Flatten { input_dir, output }) => {
            flatten_to_file(&get_cdr_dir(input_dir.as_deref()), &output)?;
        }
        Some(Commands::Generate { output_dir, files, records, seed }) => {
            let output_dir = get_corpus_dir(output_dir.as_deref());
            let config =
                GeneratorConfig { num_files: files, records_per_file: records, ..Default::default() };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let written = generate_corpus(&output_dir, &config, &mut rng, Utc::now())?;
            println!(
                "Generated {} records in {} files under {}",
                written,
                files,
                format_path_with_tilde(&output_dir)
            );
        }
        Some(Commands::Stats { corpus_dir }) => {
            show_stats(&get_corpus_dir(corpus_dir.as_deref()))?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn answer_tool_request(corpus_dir: &Path) -> Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("Failed to read request from stdin")?;
    let request: QueryRequest =
        serde_json::from_str(&input).context("Failed to parse query request")?;

    let response = RetrievalEngine::new(corpus_dir).find_bad_calls(&request);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response).context("Failed to write response")?;
    writeln!(stdout).context("Failed to write response")?;
    Ok(())
}

/// Flatten into memory first so a missing input directory leaves no output file behind
fn flatten_to_file(input_dir: &Path, output: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    let report = flatten_directory(input_dir, &mut buffer)?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&buffer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    if report.failed > 0 {
        warn!("{} call-detail records could not be flattened", report.failed);
    }
    println!("Flattened {} records into {}", report.flattened, output.display());
    Ok(())
}

/// Corpus-wide counters gathered in one pass
#[derive(Debug, Default)]
struct CorpusSummary {
    by_severity: BTreeMap<Severity, usize>,
    users: BTreeSet<String>,
    oldest: Option<DateTime<Utc>>,
    newest: Option<DateTime<Utc>>,
}

impl CorpusSummary {
    fn observe(&mut self, severity: Severity, display_name: &str, timestamp: &str) {
        *self.by_severity.entry(severity).or_default() += 1;
        if !display_name.is_empty() {
            self.users.insert(display_name.to_string());
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(timestamp) {
            let ts = ts.with_timezone(&Utc);
            self.oldest = Some(self.oldest.map_or(ts, |oldest| oldest.min(ts)));
            self.newest = Some(self.newest.map_or(ts, |newest| newest.max(ts)));
        }
    }
}

fn show_stats(corpus_dir: &Path) -> Result<()> {
    let scanner = CorpusScanner::new(corpus_dir);
    let mut records = scanner.records()?;
    let mut summary = CorpusSummary::default();
    for record in records.by_ref() {
        summary.observe(record.severity, record.display_name(), &record.timestamp);
    }
    let stats = records.stats();

    println!("Call Quality Corpus Statistics");
    println!("==============================");
    println!("Shards: {}", stats.shards_scanned);
    if stats.shards_failed > 0 {
        println!("  Unreadable shards: {}", stats.shards_failed);
    }
    println!("Total records: {}", stats.records_parsed);
    for severity in Severity::ALL {
        let count = summary.by_severity.get(&severity).copied().unwrap_or(0);
        println!("  {}: {}", severity, count);
    }
    println!("Malformed lines: {}", stats.malformed_lines);
    println!("Distinct users: {}", summary.users.len());
    for user in &summary.users {
        println!("  {}", user);
    }
    println!();
    println!("Corpus directory: {}", format_path_with_tilde(corpus_dir));

    if let Some(oldest) = summary.oldest {
        println!("Oldest alert: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = summary.newest {
        println!("Newest alert: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
