use catalog_core::validation::MAX_IMDB_CODE;
use thiserror::Error;

use crate::models::ValidationConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error(
        "min_year {min_year} is after the current year {current_year}; \
         no year could pass"
    )]
    EmptyYearRange { min_year: i32, current_year: i32 },
    #[error("max_imdb_code must be at least 1, got {0}")]
    NonPositiveImdbCeiling(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reject bounds no form could satisfy and flag ones that are merely odd.
pub fn apply_guard_rails(
    config: &ValidationConfig,
    clock_year: i32,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let current_year = config.current_year.unwrap_or(clock_year);

    if config.min_year > current_year {
        return Err(ConfigGuardRailError::EmptyYearRange {
            min_year: config.min_year,
            current_year,
        });
    }

    if config.max_imdb_code < 1 {
        return Err(ConfigGuardRailError::NonPositiveImdbCeiling(
            config.max_imdb_code,
        ));
    }

    if config.max_imdb_code > MAX_IMDB_CODE {
        warnings.push_with_hint(
            format!(
                "max_imdb_code {} is above {MAX_IMDB_CODE}; codes longer \
                 than seven digits are rejected anyway",
                config.max_imdb_code
            ),
            "Remove max_imdb_code or lower it to the seven digit range",
        );
    }

    if let Some(pinned) = config.current_year
        && pinned < clock_year
    {
        warnings.push_with_hint(
            format!(
                "current_year is pinned to {pinned}; titles released after \
                 it are rejected"
            ),
            "Unset current_year to follow the clock",
        );
    }

    Ok(warnings)
}
