//! Corpus store for trained statement/response pairs.
//!
//! Training is a one-shot bulk load: a [`CorpusBuilder`] accumulates pairs, then
//! [`CorpusBuilder::build`] consumes it and hands back an immutable [`Corpus`].
//! There is no way to mutate a built corpus, so once it is wrapped in an `Arc`
//! and shared with request handlers it stays fixed for the life of the process.

use crate::error::Result;
use crate::similarity::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// A trained association between an input statement and its response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPair {
    pub statement: String,
    pub response: String,
}

impl StatementPair {
    pub fn new(statement: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            response: response.into(),
        }
    }
}

/// Form pairs from an alternating statement/response list
///
/// Elements (0, 1), (2, 3), ... become pairs. A trailing unpaired statement is
/// dropped and logged.
pub fn pairs_from_list<S: AsRef<str>>(lines: &[S]) -> Vec<StatementPair> {
    if lines.len() % 2 != 0 {
        if let Some(last) = lines.last() {
            warn!(
                "Training list has odd length {}, dropping unpaired statement: {:?}",
                lines.len(),
                last.as_ref()
            );
        }
    }

    lines
        .chunks_exact(2)
        .map(|chunk| StatementPair::new(chunk[0].as_ref(), chunk[1].as_ref()))
        .collect()
}

/// Mutable handle used only while training
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    pairs: Vec<StatementPair>,
    /// Normalized statement -> position in `pairs`
    positions: HashMap<String, usize>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append pairs. A statement already present keeps its position but takes the
    /// newer response. Pairs with a blank statement or a blank response are skipped.
    pub fn ingest<I>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = StatementPair>,
    {
        for pair in pairs {
            let key = normalize(&pair.statement);
            if key.is_empty() {
                warn!("Skipping training pair with empty statement");
                continue;
            }
            if pair.response.trim().is_empty() {
                warn!("Skipping training pair with empty response for {:?}", pair.statement);
                continue;
            }

            match self.positions.get(&key) {
                Some(&idx) => {
                    self.pairs[idx].response = pair.response;
                }
                None => {
                    self.positions.insert(key, self.pairs.len());
                    self.pairs.push(pair);
                }
            }
        }
        self
    }

    /// Ingest an alternating statement/response list
    pub fn train_list<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        self.ingest(pairs_from_list(lines))
    }

    /// Ingest a JSON file holding an array of alternating strings
    pub fn train_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let lines: Vec<String> = serde_json::from_str(&content)?;
        info!("Loaded {} training lines from {}", lines.len(), path.display());
        Ok(self.train_list(&lines))
    }

    /// Finish training and publish the read-only corpus
    pub fn build(self) -> Corpus {
        info!("Corpus trained with {} statement pairs", self.pairs.len());
        Corpus { pairs: self.pairs }
    }
}

/// Immutable, deduplicated sequence of statement pairs in insertion order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pairs: Vec<StatementPair>,
}

impl Corpus {
    /// Build a corpus in one step from already-formed pairs
    pub fn ingest<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = StatementPair>,
    {
        let mut builder = CorpusBuilder::new();
        builder.ingest(pairs);
        builder.build()
    }

    /// Build a corpus in one step from an alternating list
    pub fn from_list<S: AsRef<str>>(lines: &[S]) -> Self {
        Self::ingest(pairs_from_list(lines))
    }

    /// All pairs, in first-insertion order
    pub fn all_pairs(&self) -> &[StatementPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
