//! Error types for LifeLens

use thiserror::Error;

/// Top-level error type for LifeLens operations
#[derive(Debug, Error)]
pub enum LifelensError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LifelensError {
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LifelensError>;
