//! Flattening of nested call-detail records
//!
//! A call-detail record nests conference → session → participant → stream. The flattener
//! turns one record into a single-level [`FlattenedSummary`](crate::models::FlattenedSummary)
//! with a natural-language summary line and one metric description per stream. Missing
//! metrics are rendered as `none`; no record is ever rejected.

pub mod batch;
pub mod flattener;

pub use batch::{CDR_EXTENSION, FlattenReport, discover_call_records, flatten_directory};
pub use flattener::{MISSING, describe_stream, flatten_record};
