use arcstr::ArcStr;
use question_pattern::PatternError;
use thiserror::Error;

/// Inconsistencies found while building the pattern index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid property identifier: {0}")]
    InvalidPropertyIdentifier(ArcStr),
    #[error("invalid class identifier: {0}")]
    InvalidClassIdentifier(ArcStr),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ProviderError {
    #[error("not available")]
    NotAvailable,
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid provider configuration: {0}")]
    Json(#[from] serde_json::Error),
}
