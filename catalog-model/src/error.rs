use thiserror::Error;

/// Errors produced by model constructors and conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("genre '{name}' has not been persisted and cannot be referenced")]
    UnsavedGenre { name: String },

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
