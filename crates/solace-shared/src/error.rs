//! Error types for Solace.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolaceError {
    #[error("Invalid similarity threshold {0}: must be within [0, 1]")]
    InvalidThreshold(f64),

    #[error("Default response must not be empty")]
    EmptyDefaultResponse,

    #[error("Rule '{0}' has no responses to choose from")]
    EmptyResponsePool(String),

    #[error("Rule '{0}' has no resources to list")]
    EmptyResourceList(String),

    #[error("Rule '{0}' has no trigger keywords")]
    NoKeywords(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SolaceError {
    pub fn code(&self) -> i32 {
        match self {
            SolaceError::InvalidThreshold(_) => -32010,
            SolaceError::EmptyDefaultResponse => -32011,
            SolaceError::EmptyResponsePool(_) => -32012,
            SolaceError::EmptyResourceList(_) => -32013,
            SolaceError::NoKeywords(_) => -32014,
            SolaceError::Config(_) => -32015,
            SolaceError::Io(_) => -32006,
            SolaceError::Json(_) => -32700,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolaceError>;
