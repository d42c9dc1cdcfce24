//! Dialogue facade: rules first, retrieval second.
//!
//! A [`DialogueEngine`] is built once from a trained corpus and a rule list and is
//! read-only afterwards. `respond` takes `&self`, so one engine behind an `Arc` can
//! serve any number of concurrent callers.

use crate::config::{validate_threshold, SolaceConfig};
use crate::error::{Result, SolaceError};
use crate::matcher::{LinearMatcher, MatchResult, Matcher};
use crate::rules::{ResponsePicker, RuleHit, RuleRouter, SeededPicker, ThreadRngPicker};
use std::sync::Arc;
use tracing::{debug, info};

/// Which path produced a reply
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A keyword rule answered; retrieval was skipped
    Rule(RuleHit),
    /// Retrieval answered, possibly with the fallback response
    Retrieval(MatchResult),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Rule(hit) => &hit.response,
            Reply::Retrieval(result) => &result.response,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Reply::Rule(hit) => hit.response,
            Reply::Retrieval(result) => result.response,
        }
    }
}

pub struct DialogueEngine<M = LinearMatcher> {
    router: RuleRouter,
    matcher: M,
    threshold: f64,
    default_response: String,
}

impl DialogueEngine<LinearMatcher> {
    /// Validate `config`, train its corpus and assemble the engine
    pub fn from_config(config: &SolaceConfig) -> Result<Self> {
        config.validate()?;

        let corpus = Arc::new(config.train_corpus()?);
        let rules = config.rules.build_rules()?;

        let picker: Arc<dyn ResponsePicker> = match config.engine.seed {
            Some(seed) => Arc::new(SeededPicker::new(seed)),
            None => Arc::new(ThreadRngPicker),
        };

        info!(
            "Dialogue engine ready: {} pairs, {} rules, threshold {}",
            corpus.len(),
            rules.len(),
            config.engine.threshold
        );

        Self::new(
            RuleRouter::with_picker(rules, picker),
            LinearMatcher::new(corpus),
            config.engine.threshold,
            config.engine.default_response.clone(),
        )
    }
}

impl<M: Matcher> DialogueEngine<M> {
    pub fn new(
        router: RuleRouter,
        matcher: M,
        threshold: f64,
        default_response: impl Into<String>,
    ) -> Result<Self> {
        let threshold = validate_threshold(threshold)?;
        let default_response = default_response.into();
        if default_response.trim().is_empty() {
            return Err(SolaceError::EmptyDefaultResponse);
        }

        Ok(Self {
            router,
            matcher,
            threshold,
            default_response,
        })
    }

    /// Reply to one utterance
    pub fn respond(&self, utterance: &str) -> String {
        self.respond_detailed(utterance).into_text()
    }

    /// Reply to one utterance, reporting which path answered
    pub fn respond_detailed(&self, utterance: &str) -> Reply {
        if let Some(hit) = self.router.route_hit(utterance) {
            return Reply::Rule(hit);
        }

        let result = self.retrieve(utterance);
        debug!(
            "Retrieval answered (confidence {:.3}, fallback: {})",
            result.confidence,
            result.is_fallback()
        );
        Reply::Retrieval(result)
    }

    /// Retrieval only, ignoring rules
    pub fn retrieve(&self, utterance: &str) -> MatchResult {
        self.matcher
            .best_match(utterance, self.threshold, &self.default_response)
    }

    pub fn router(&self) -> &RuleRouter {
        &self.router
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn default_response(&self) -> &str {
        &self.default_response
    }
}
