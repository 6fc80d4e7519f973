//! callscope - VoIP call-quality telemetry tooling
//!
//! This library answers "which bad calls did this person have?" over a directory of
//! line-delimited alert shards, and flattens nested call-detail records into short
//! summaries. It supports:
//!
//! - Lazy, fault-tolerant scanning of `*.jsonl` alert shards
//! - Fuzzy user-name matching with a configurable similarity threshold
//! - Filtering to Medium/High severity and aggregating under one resolved name
//! - Flattening call-detail records (sessions, participants, streams) to one level
//! - Generating synthetic corpora for local testing
//!
//! # Example
//!
//! ```no_run
//! use callscope::{QueryRequest, find_bad_calls};
//! use std::path::Path;
//!
//! let response = find_bad_calls(Path::new("jsonl_data"), &QueryRequest::new("Jaimie Tores"));
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod cli;
pub mod corpus;
pub mod filters;
pub mod flatten;
pub mod generator;
pub mod matcher;
pub mod models;
pub mod parsers;
pub mod retrieval;
pub mod utils;

// Re-export commonly used types
pub use corpus::{CorpusError, CorpusScanner};
pub use flatten::{flatten_directory, flatten_record};
pub use matcher::{FuzzyMatcher, Scorer};
pub use models::{AlertRecord, CallDetailRecord, FlattenedSummary, QueryRequest, QueryResponse};
pub use retrieval::{RetrievalEngine, find_bad_calls};
pub use utils::paths::format_path_with_tilde;
