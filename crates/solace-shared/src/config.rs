//! Configuration management for Solace.
//!
//! Loads settings from /etc/solace/config.toml or uses defaults. Every section is
//! optional; missing fields take the built-in values from `training_data`.

use crate::corpus::{Corpus, CorpusBuilder};
use crate::error::{Result, SolaceError};
use crate::rules::{Resource, Rule, RuleAction, Trigger};
use crate::training_data;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/solace/config.toml";

/// Default config file path for fallback
pub const DEFAULT_CONFIG_PATH: &str = "/var/lib/solace/config.toml";

/// Retrieval settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum confidence for a corpus match, within [0, 1]
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Returned when nothing in the corpus clears the threshold
    #[serde(default = "default_response")]
    pub default_response: String,

    /// Seed for random prompt selection; unset means thread RNG
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_threshold() -> f64 {
    training_data::DEFAULT_THRESHOLD
}

fn default_response() -> String {
    training_data::DEFAULT_RESPONSE.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            default_response: default_response(),
            seed: None,
        }
    }
}

/// Where training data comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Train on the built-in support corpus first
    #[serde(default = "default_true")]
    pub builtin: bool,

    /// JSON files, each an array of alternating statement/response strings.
    /// Trained in order after the built-in set.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            files: Vec::new(),
        }
    }
}

/// Keyword rule settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_crisis_keywords")]
    pub crisis_keywords: Vec<String>,

    #[serde(default = "default_crisis_preamble")]
    pub crisis_preamble: String,

    #[serde(default = "training_data::crisis_resources")]
    pub crisis_resources: Vec<Resource>,

    #[serde(default = "default_mindfulness_keywords")]
    pub mindfulness_keywords: Vec<String>,

    #[serde(default = "default_mindfulness_prompts")]
    pub mindfulness_prompts: Vec<String>,
}

fn default_crisis_keywords() -> Vec<String> {
    to_strings(training_data::CRISIS_KEYWORDS)
}

fn default_crisis_preamble() -> String {
    training_data::CRISIS_PREAMBLE.to_string()
}

fn default_mindfulness_keywords() -> Vec<String> {
    to_strings(training_data::MINDFULNESS_KEYWORDS)
}

fn default_mindfulness_prompts() -> Vec<String> {
    to_strings(training_data::MINDFULNESS_PROMPTS)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            crisis_keywords: default_crisis_keywords(),
            crisis_preamble: default_crisis_preamble(),
            crisis_resources: training_data::crisis_resources(),
            mindfulness_keywords: default_mindfulness_keywords(),
            mindfulness_prompts: default_mindfulness_prompts(),
        }
    }
}

impl RuleConfig {
    /// Rules in priority order: mindfulness prompts first, then crisis resources
    pub fn build_rules(&self) -> Result<Vec<Rule>> {
        let mindfulness = Rule::new(
            "mindfulness",
            Trigger::any_keyword(&self.mindfulness_keywords),
            RuleAction::RandomChoice(self.mindfulness_prompts.clone()),
        )?;

        let crisis = Rule::new(
            "crisis",
            Trigger::any_keyword(&self.crisis_keywords),
            RuleAction::FormattedList {
                preamble: self.crisis_preamble.clone(),
                items: self.crisis_resources.clone(),
            },
        )?;

        Ok(vec![mindfulness, crisis])
    }
}

/// Top-level Solace configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolaceConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub corpus: CorpusConfig,

    #[serde(default)]
    pub rules: RuleConfig,
}

impl SolaceConfig {
    /// Load config from the standard locations, falling back to defaults
    pub fn load() -> Self {
        Self::load_first(&[CONFIG_PATH, DEFAULT_CONFIG_PATH])
    }

    /// First candidate that loads wins. Missing files are skipped quietly, unreadable
    /// or malformed ones are skipped with a warning naming the cause.
    pub fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Self {
        for path in candidates {
            let path = path.as_ref();
            match Self::load_from_path(path) {
                Ok(config) => return config,
                Err(SolaceError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("No config at {}", path.display());
                }
                Err(SolaceError::Config(e)) => {
                    warn!("Ignoring malformed config {}: {}", path.display(), e);
                }
                Err(e) => {
                    warn!("Ignoring unreadable config {}: {}", path.display(), e);
                }
            }
        }

        info!("No usable config found, using defaults");
        SolaceConfig::default()
    }

    /// Load config from a specific path
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: SolaceConfig = toml::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings the engine cannot honour. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.engine.threshold)?;

        if self.engine.default_response.trim().is_empty() {
            return Err(SolaceError::EmptyDefaultResponse);
        }

        self.rules.build_rules().map(|_| ())
    }

    /// Train the corpus described by `[corpus]`
    pub fn train_corpus(&self) -> Result<Corpus> {
        let mut builder = CorpusBuilder::new();

        if self.corpus.builtin {
            builder.train_list(training_data::SUPPORT_CORPUS);
        }
        for file in &self.corpus.files {
            builder.train_file(file)?;
        }

        Ok(builder.build())
    }
}

/// Thresholds must lie in [0, 1]; NaN is rejected too
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(SolaceError::InvalidThreshold(threshold))
    }
}
