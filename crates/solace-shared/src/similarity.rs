//! Utterance similarity scoring.
//!
//! Scores live in [0, 1]. Both sides are normalized first (lowercase, punctuation
//! stripped, whitespace collapsed). The score blends two signals:
//!
//! - token overlap, where a token within a small edit distance of another counts as
//!   partially shared, and a single-edit typo ("stresed", "sd" for "sad") counts as
//!   almost fully shared
//! - character-level edit-distance similarity of the whole normalized strings
//!
//! Token overlap carries most of the weight so that unrelated sentences which happen
//! to share letters stay near zero, while the character signal breaks ties between
//! candidates with the same overlap.

use std::collections::BTreeSet;

/// Weight of the token-overlap signal in the blended score
const TOKEN_WEIGHT: f64 = 0.85;

/// Weight of the whole-string edit-distance signal
const CHAR_WEIGHT: f64 = 0.15;

/// Share of the token signal measured against the shorter token set
const CONTAINMENT_WEIGHT: f64 = 0.8;

/// Share of the token signal measured against the longer token set
const COVERAGE_WEIGHT: f64 = 0.2;

/// Minimum per-token similarity for a misspelled token to count as shared
const FUZZY_TOKEN_FLOOR: f64 = 0.7;

/// Tokens shorter than this match only exactly or one edit away from a longer token
const MIN_FUZZY_TOKEN_LEN: usize = 3;

/// Credit for a token one edit away from another, when the longer one has at
/// least `MIN_FUZZY_TOKEN_LEN` chars
const ONE_EDIT_CREDIT: f64 = 0.95;

/// Pluggable similarity metric used by the retrieval matcher
pub trait Similarity: Send + Sync {
    /// Score two utterances. Must return a value in [0, 1], and 1.0 only when
    /// both normalize to the same text.
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Default metric: fuzzy token overlap blended with edit-distance similarity
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendedSimilarity;

impl Similarity for BlendedSimilarity {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a = normalize(a);
        let b = normalize(b);

        if a == b {
            return 1.0;
        }

        let token = token_overlap(&tokens(&a), &tokens(&b));
        let chars = char_similarity(&a, &b);

        (TOKEN_WEIGHT * token + CHAR_WEIGHT * chars).clamp(0.0, 1.0)
    }
}

/// Lowercase, drop punctuation and collapse runs of whitespace to single spaces
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into a deterministic token set
pub fn tokens(normalized: &str) -> BTreeSet<String> {
    normalized.split_whitespace().map(String::from).collect()
}

/// Fuzzy token overlap in [0, 1]
///
/// Each token of the smaller set is credited with its best similarity against the
/// larger set. The credited sum is measured against both set sizes.
pub fn token_overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let shared: f64 = small
        .iter()
        .map(|token| {
            if large.contains(token) {
                return 1.0;
            }
            large
                .iter()
                .map(|other| token_similarity(token, other))
                .fold(0.0, f64::max)
        })
        .sum();

    let containment = shared / small.len() as f64;
    let coverage = shared / large.len() as f64;

    CONTAINMENT_WEIGHT * containment + COVERAGE_WEIGHT * coverage
}

/// Similarity of two distinct tokens, zero unless close enough to be a typo
fn token_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());

    if longest < MIN_FUZZY_TOKEN_LEN {
        return 0.0;
    }

    let distance = levenshtein(&a, &b);
    let sim = 1.0 - distance as f64 / longest as f64;

    if distance <= 1 {
        return sim.max(ONE_EDIT_CREDIT);
    }
    if a.len() < MIN_FUZZY_TOKEN_LEN || b.len() < MIN_FUZZY_TOKEN_LEN {
        return 0.0;
    }
    if sim >= FUZZY_TOKEN_FLOOR {
        sim
    } else {
        0.0
    }
}

/// `1 - distance / longer_length`, with two empty strings counting as identical
pub fn char_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    1.0 - levenshtein(&a, &b) as f64 / longest as f64
}

/// Classic two-row Levenshtein distance over chars
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
