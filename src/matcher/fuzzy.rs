use serde::{Deserialize, Serialize};

use super::similarity::{normalize, ratio, token_sort_ratio};
use crate::models::DEFAULT_SIMILARITY_THRESHOLD;

/// Similarity metric used to compare a query with a display name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scorer {
    /// Character-level indel similarity
    #[default]
    Ratio,
    /// Indel similarity over sorted word tokens (ignores word order and punctuation)
    TokenSort,
}

impl Scorer {
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            Scorer::Ratio => ratio(a, b),
            Scorer::TokenSort => token_sort_ratio(a, b),
        }
    }
}

/// Accepts display names whose similarity to the query reaches a threshold
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    query: String,
    threshold: u8,
    scorer: Scorer,
}

impl FuzzyMatcher {
    /// Create a matcher with the default threshold (80) and scorer
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            scorer: Scorer::default(),
        }
    }

    /// Set the acceptance threshold; values above 100 are clamped
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.min(100);
        self
    }

    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn score(&self, candidate: &str) -> f64 {
        self.scorer.score(&self.query, candidate)
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.score(candidate) >= f64::from(self.threshold)
    }
}

/// Whether two names normalize to the same text (used to tell name variants apart)
pub fn same_name(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
