use log::warn;

use crate::matcher::same_name;
use crate::models::{AlertRecord, BadCallRecord, QueryResponse};

/// Collects matched bad-call records for one query
///
/// The first display name accepted by the matcher becomes the canonical resolved
/// name. Records from every accepted name variant are kept, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    resolved_user: Option<String>,
    accepted_names: Vec<String>,
    records: Vec<BadCallRecord>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a display name the matcher accepted
    pub fn accept_name(&mut self, display_name: &str) {
        if self.resolved_user.is_none() {
            self.resolved_user = Some(display_name.to_string());
        }
        if !self.accepted_names.iter().any(|n| same_name(n, display_name)) {
            self.accepted_names.push(display_name.to_string());
        }
    }

    /// Add a record that passed both the matcher and the severity filter
    pub fn push(&mut self, record: AlertRecord) {
        self.records.push(BadCallRecord::from(record));
    }

    /// Append another aggregator's results after this one's
    pub fn merge(&mut self, other: Aggregator) {
        for name in &other.accepted_names {
            self.accept_name(name);
        }
        self.records.extend(other.records);
    }

    pub fn resolved_user(&self) -> Option<&str> {
        self.resolved_user.as_deref()
    }

    /// Distinct display names accepted so far, in order of first appearance
    pub fn accepted_names(&self) -> &[String] {
        &self.accepted_names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Turn the collected records into a response for `query`
    pub fn finish(self, query: &str) -> QueryResponse {
        if self.records.is_empty() {
            return QueryResponse::no_match(query);
        }

        if self.accepted_names.len() > 1 {
            warn!(
                "Query '{}' matched {} distinct display names ({}); reporting them as '{}'",
                query,
                self.accepted_names.len(),
                self.accepted_names.join(", "),
                self.resolved_user.as_deref().unwrap_or_default()
            );
        }

        QueryResponse::Match {
            resolved_user: self.resolved_user.unwrap_or_else(|| query.to_string()),
            records: self.records,
        }
    }
}
