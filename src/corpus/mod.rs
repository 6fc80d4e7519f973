//! Corpus scanning over sharded line-delimited alert files
//!
//! # Error Handling Strategy
//!
//! - **Missing corpus**: A missing or non-directory corpus path is the only condition that
//!   stops a scan. It surfaces as a [`CorpusError`] so callers can turn it into a structured
//!   response.
//!
//! - **Shard-level failures**: A shard that cannot be opened, or that hits a read error, is
//!   logged and counted in [`ScanStats::shards_failed`]; the remaining shards are still read.
//!
//! - **Line-level failures**: Delegated to the parsers, which skip malformed lines and count
//!   them in [`ScanStats::malformed_lines`].

pub mod discovery;
pub mod error;
pub mod scanner;

pub use discovery::{SHARD_EXTENSION, discover_shards};
pub use error::CorpusError;
pub use scanner::{CorpusRecords, CorpusScanner, ScanStats};
