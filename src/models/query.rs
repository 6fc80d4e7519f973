use serde::{Deserialize, Serialize};

use super::alert::{AlertRecord, Severity};

pub const DEFAULT_SIMILARITY_THRESHOLD: u8 = 80;

/// Request accepted by the retrieval engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_threshold"
    )]
    pub similarity_threshold: Option<u8>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), similarity_threshold: None }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.similarity_threshold = Some(threshold);
        self
    }

    /// Effective threshold, defaulted and clamped to 0..=100
    pub fn threshold(&self) -> u8 {
        self.similarity_threshold.unwrap_or(DEFAULT_SIMILARITY_THRESHOLD).min(100)
    }
}

/// Projection of an [`AlertRecord`] returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadCallRecord {
    pub timestamp: String,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_severity")]
    pub severity: Severity,
    pub issue: String,
    pub platform: String,
    pub description: String,
}

impl From<AlertRecord> for BadCallRecord {
    fn from(record: AlertRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            severity: record.severity,
            issue: record.issue,
            platform: record.platform,
            description: record.description,
        }
    }
}

/// The three outcomes of a retrieval query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Match {
        #[serde(rename = "resolvedUser")]
        resolved_user: String,
        records: Vec<BadCallRecord>,
    },
    NoMatch {
        message: String,
    },
    CorpusUnavailable {
        error: String,
    },
}

impl QueryResponse {
    pub fn no_match(query: &str) -> Self {
        QueryResponse::NoMatch { message: format!("No bad calls found for user {}.", query) }
    }

    pub fn corpus_unavailable(reason: impl Into<String>) -> Self {
        QueryResponse::CorpusUnavailable { error: reason.into() }
    }

    pub fn records(&self) -> &[BadCallRecord] {
        match self {
            QueryResponse::Match { records, .. } => records,
            _ => &[],
        }
    }

    pub fn resolved_user(&self) -> Option<&str> {
        match self {
            QueryResponse::Match { resolved_user, .. } => Some(resolved_user),
            _ => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, QueryResponse::Match { .. })
    }
}
