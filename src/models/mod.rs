//! Data models for call-quality telemetry.
//!
//! - [`AlertRecord`] - one quality event per line of a corpus shard
//! - [`CallDetailRecord`] - nested conference/session/participant/stream record
//! - [`FlattenedSummary`] - single-level summary of a call-detail record
//! - [`QueryRequest`] / [`QueryResponse`] - retrieval engine call contract
//!
//! Special fields (severity) are decoded through the `deserializers` module.

pub mod alert;
pub mod call_record;
pub mod query;

pub use alert::{AlertRecord, AlertUser, Severity};
pub use call_record::{
    CallDetailRecord, DeviceMetrics, FlattenedSummary, MetricValue, Participant, Session, Stream,
};
pub use query::{BadCallRecord, DEFAULT_SIMILARITY_THRESHOLD, QueryRequest, QueryResponse};
