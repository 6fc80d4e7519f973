//! Fuzzy display-name matching
//!
//! Display names in the corpus are often decorated (`Aryan Nayan-XT`) or written in
//! `Surname, Given` form, and callers misspell them. Names are compared with a symmetric
//! similarity score and accepted when the score reaches a caller-tunable threshold.

pub mod fuzzy;
pub mod similarity;

pub use fuzzy::{FuzzyMatcher, Scorer, same_name};
pub use similarity::{normalize, ratio, token_sort_ratio};
