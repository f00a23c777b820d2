//! Field readers shared by the reverse mappings.

use std::str::FromStr;

use crate::error::{MappingError, Result};

/// Parse a numeric text field the validators guarantee to be well formed.
pub(crate) fn required_number<T: FromStr>(
    value: &Option<String>,
    field: &'static str,
) -> Result<T> {
    parse_number(value.as_deref(), field)
}

pub(crate) fn parse_number<T: FromStr>(
    value: Option<&str>,
    field: &'static str,
) -> Result<T> {
    let raw = value.ok_or(MappingError::MissingField { field })?;
    raw.parse().map_err(|_| MappingError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Copy a field the validators guarantee to be present.
pub(crate) fn required<T: Clone>(
    value: &Option<T>,
    field: &'static str,
) -> Result<T> {
    value.clone().ok_or(MappingError::MissingField { field })
}
