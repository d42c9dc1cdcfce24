//! Shared types and the dialogue core for Solace components.
//!
//! An utterance goes through the keyword [`rules`] first and, if none fires,
//! through similarity retrieval over the trained [`corpus`].

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod rules;
pub mod similarity;
pub mod training_data;

pub use config::SolaceConfig;
pub use corpus::{Corpus, CorpusBuilder, StatementPair};
pub use engine::{DialogueEngine, Reply};
pub use error::SolaceError;
pub use matcher::{LinearMatcher, MatchResult, Matcher};
pub use rules::{Resource, ResponsePicker, Rule, RuleAction, RuleRouter, SeededPicker, Trigger};
pub use similarity::{BlendedSimilarity, Similarity};

/// Version reported by the binaries
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
