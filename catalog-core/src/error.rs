use thiserror::Error;

use crate::validation::ValidationReport;

/// A submitted form could not be turned back into an entity.
///
/// Every variant means a value reached the mapper that the validators are
/// supposed to have rejected. The request carrying it should be aborted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("required field `{field}` is missing")]
    MissingField { field: &'static str },

    #[error("field `{field}` is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("length {hours}:{minutes}:{seconds} does not fit into seconds")]
    LengthOverflow {
        hours: u32,
        minutes: u32,
        seconds: u32,
    },
}

/// Outcome of the validate-then-map submit flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form rejected with {} violation(s)", .0.len())]
    Invalid(ValidationReport),

    #[error("validated form failed to map: {0}")]
    Mapping(#[from] MappingError),
}

pub type Result<T> = std::result::Result<T, MappingError>;

/// A form kind name that no rule table is registered under.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown form kind `{0}`")]
pub struct UnknownFormKind(pub String);
