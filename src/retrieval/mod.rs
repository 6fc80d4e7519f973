//! Bad-call retrieval: scan → fuzzy match → severity filter → aggregate
//!
//! The engine is the call contract consumed by the agent layer. It never returns an
//! error: every request ends in a match, a no-match message, or a corpus-unavailable
//! error response.

pub mod aggregate;
pub mod engine;

pub use aggregate::Aggregator;
pub use engine::{RetrievalEngine, find_bad_calls};
