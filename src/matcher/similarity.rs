//! String similarity scores in the range `0.0..=100.0`.
//!
//! Both scorers are symmetric: `score(a, b) == score(b, a)`.

use nucleo::chars;

/// Fold case, strip diacritics, trim and collapse runs of whitespace
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !result.is_empty();
            continue;
        }
        if pending_space {
            result.push(' ');
            pending_space = false;
        }
        result.push(chars::to_lower_case(chars::normalize(c)));
    }

    result
}

/// Length of the longest common subsequence of two char slices
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Keep the shorter sequence in the inner dimension
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];

    for &oc in outer {
        for (j, &ic) in inner.iter().enumerate() {
            curr[j + 1] = if oc == ic { prev[j] + 1 } else { prev[j + 1].max(curr[j]) };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}

fn ratio_normalized(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    (2 * lcs_len(&a, &b)) as f64 * 100.0 / total as f64
}

/// Indel similarity of the normalized strings
///
/// `100 * 2 * LCS(a, b) / (len(a) + len(b))`, equivalent to one minus the
/// normalized insert/delete edit distance. Two empty strings score 100.
///
/// ```
/// use callscope::matcher::similarity::ratio;
///
/// assert_eq!(ratio("Jamie Torres", "jamie torres"), 100.0);
/// assert!(ratio("Jaimie Tores", "Jamie Torres") > 90.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    ratio_normalized(&normalize(a), &normalize(b))
}

/// Split on anything that is not alphanumeric, sort the tokens and rejoin them
fn sorted_tokens(text: &str) -> String {
    let normalized = normalize(text);
    let mut tokens: Vec<&str> =
        normalized.split(|c: char| !c.is_alphanumeric()).filter(|t| !t.is_empty()).collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// [`ratio`] after sorting word tokens, so word order and punctuation are ignored
///
/// ```
/// use callscope::matcher::similarity::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("More, Santosh", "santosh more"), 100.0);
/// ```
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio_normalized(&sorted_tokens(a), &sorted_tokens(b))
}
