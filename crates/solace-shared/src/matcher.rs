//! Retrieval matcher: best corpus statement for an utterance.
//!
//! The linear matcher scans every pair. Ties on the maximum score go to the pair
//! that was trained first, so results do not depend on anything but corpus order.

use crate::corpus::{Corpus, StatementPair};
use crate::similarity::{BlendedSimilarity, Similarity};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Outcome of matching one utterance against the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Paired response, or the default response on fallback
    pub response: String,
    /// Best similarity found (0.0 for an empty corpus)
    pub confidence: f64,
    /// The matched corpus statement; `None` when the fallback fired
    pub matched_statement: Option<String>,
}

impl MatchResult {
    pub fn is_fallback(&self) -> bool {
        self.matched_statement.is_none()
    }

    fn fallback(default_response: &str, confidence: f64) -> Self {
        Self {
            response: default_response.to_string(),
            confidence,
            matched_statement: None,
        }
    }
}

/// Anything that can pick a response for an utterance from trained data
///
/// Implementations must honour the same contract: return the best candidate when
/// its confidence is at least `threshold`, the default response otherwise.
pub trait Matcher: Send + Sync {
    fn best_match(&self, utterance: &str, threshold: f64, default_response: &str) -> MatchResult;
}

/// O(n) scan over the whole corpus
#[derive(Debug, Clone)]
pub struct LinearMatcher<S = BlendedSimilarity> {
    corpus: Arc<Corpus>,
    scorer: S,
}

impl LinearMatcher<BlendedSimilarity> {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self::with_scorer(corpus, BlendedSimilarity)
    }
}

impl<S: Similarity> LinearMatcher<S> {
    pub fn with_scorer(corpus: Arc<Corpus>, scorer: S) -> Self {
        Self { corpus, scorer }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Highest-scoring pair, earliest wins on ties
    fn closest(&self, utterance: &str) -> Option<(&StatementPair, f64)> {
        let mut best: Option<(&StatementPair, f64)> = None;

        for pair in self.corpus.all_pairs() {
            let score = self.scorer.score(utterance, &pair.statement);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((pair, score));
            }
        }

        best
    }
}

impl<S: Similarity> Matcher for LinearMatcher<S> {
    fn best_match(&self, utterance: &str, threshold: f64, default_response: &str) -> MatchResult {
        let Some((pair, confidence)) = self.closest(utterance) else {
            debug!("Corpus is empty, using default response");
            return MatchResult::fallback(default_response, 0.0);
        };

        if confidence >= threshold {
            debug!(
                "Matched {:?} with confidence {:.3}",
                pair.statement, confidence
            );
            MatchResult {
                response: pair.response.clone(),
                confidence,
                matched_statement: Some(pair.statement.clone()),
            }
        } else {
            debug!(
                "Best candidate {:?} scored {:.3}, below threshold {:.3}",
                pair.statement, confidence, threshold
            );
            MatchResult::fallback(default_response, confidence)
        }
    }
}
