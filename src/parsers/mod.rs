//! Parsers for corpus shards and call-detail record documents
//!
//! # Error Handling Strategy
//!
//! Shard parsing follows a **graceful degradation** approach:
//!
//! - **Individual line failures**: A line that is not valid UTF-8, not valid JSON, or does not
//!   match the alert schema is logged and skipped. It never aborts the rest of the shard.
//!
//! - **Blank lines**: Whitespace-only lines are ignored and are not counted as malformed.
//!
//! - **I/O failures**: A read error in the middle of a shard abandons that shard only; the
//!   records already yielded are kept and the shard is reported as aborted.
//!
//! - **Corruption warnings**: If more than half of a shard's lines fail to parse, a warning is
//!   logged, but the valid records are still returned.
//!
//! Call-detail record documents are single JSON objects; failing to open or decode one is an
//! `anyhow` error with context, left to the caller to skip or propagate.

pub mod alerts;
pub mod call_record;
pub mod deserializers;

pub use alerts::{ShardReader, ShardStats, parse_alert_line, parse_shard_file};
pub use call_record::{parse_call_record, parse_call_record_file};
