use anyhow::{Context, anyhow};
use catalog_core::validation::{MAX_IMDB_CODE, MIN_YEAR, bounds::this_year};
use catalog_core::ValidationBounds;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const PATH_VAR: &str = "CATALOG_VALIDATION_PATH";
const JSON_VAR: &str = "CATALOG_VALIDATION_JSON";

/// Source that produced the validation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ValidationConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("defaults"),
            Self::Explicit(path) => write!(f, "{}", path.display()),
            Self::EnvPath(path) => {
                write!(f, "{} ({PATH_VAR})", path.display())
            }
            Self::EnvInline => f.write_str(JSON_VAR),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Bounds for the year and IMDB code rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Earliest release year accepted by the year rules.
    pub min_year: i32,
    /// Latest accepted year. Leave unset to follow the clock, pin it to make
    /// results reproducible.
    pub current_year: Option<i32>,
    /// Largest accepted IMDB code. Codes are limited to seven digits whatever
    /// this is set to.
    pub max_imdb_code: i32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            current_year: None,
            max_imdb_code: MAX_IMDB_CODE,
        }
    }
}

impl ValidationConfig {
    /// Load overrides using environment variables.
    /// Evaluation order:
    /// 1) `$CATALOG_VALIDATION_PATH` (TOML or JSON file),
    /// 2) `$CATALOG_VALIDATION_JSON` (inline JSON),
    /// 3) the first default file found in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ValidationConfigSource)> {
        Self::load_from_vars(|key| env::var(key).ok(), Path::new("."))
    }

    /// [`ValidationConfig::load_from_env`] over an arbitrary variable lookup,
    /// with default files resolved against `base`.
    pub fn load_from_vars(
        var: impl Fn(&str) -> Option<String>,
        base: &Path,
    ) -> anyhow::Result<(Self, ValidationConfigSource)> {
        if let Some(path_str) = var(PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ValidationConfigSource::EnvPath(path)));
        }

        if let Some(raw) = var(JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {JSON_VAR}"))?;
            return Ok((parsed, ValidationConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(base) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ValidationConfigSource::File(path)));
        }

        Ok((Self::default(), ValidationConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read validation config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid validation config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid validation config {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // TOML first, JSON as a fallback.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse validation config {}: \
                     toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid validation config json: {err}"))
    }

    /// The configured current year, or the clock's.
    pub fn resolved_current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(this_year)
    }

    pub fn to_bounds(&self) -> ValidationBounds {
        ValidationBounds::new(
            self.min_year,
            self.resolved_current_year(),
            self.max_imdb_code,
        )
    }

    fn find_default_file(base: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "validation.toml",
            "validation.json",
            "config/validation.toml",
            "config/validation.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| base.join(candidate))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config =
            ValidationConfig::parse_from_str("min_year = 1950\n", "inline")
                .unwrap();
        assert_eq!(config.min_year, 1950);
        assert_eq!(config.current_year, None);
        assert_eq!(config.max_imdb_code, MAX_IMDB_CODE);
    }

    #[test]
    fn json_is_accepted_without_extension() {
        let config = ValidationConfig::parse_from_str(
            r#"{"current_year": 2020}"#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.current_year, Some(2020));
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = ValidationConfig::parse_from_str("{min_year", "inline")
            .unwrap_err()
            .to_string();
        assert!(err.contains("toml error"), "{err}");
        assert!(err.contains("json error"), "{err}");
    }

    #[test]
    fn inline_json_from_vars() {
        let base = Path::new("/nonexistent-catalog-base");
        let (config, source) = ValidationConfig::load_from_vars(
            vars(&[(JSON_VAR, r#"{"max_imdb_code": 500}"#)]),
            base,
        )
        .unwrap();
        assert_eq!(config.max_imdb_code, 500);
        assert_eq!(source, ValidationConfigSource::EnvInline);
    }

    #[test]
    fn blank_vars_fall_through_to_defaults() {
        let base = Path::new("/nonexistent-catalog-base");
        let (config, source) = ValidationConfig::load_from_vars(
            vars(&[(PATH_VAR, "  "), (JSON_VAR, "")]),
            base,
        )
        .unwrap();
        assert_eq!(config, ValidationConfig::default());
        assert_eq!(source, ValidationConfigSource::Default);
    }

    #[test]
    fn pinned_year_becomes_the_upper_bound() {
        let config = ValidationConfig {
            current_year: Some(2001),
            ..ValidationConfig::default()
        };
        assert_eq!(
            config.to_bounds(),
            ValidationBounds::new(MIN_YEAR, 2001, MAX_IMDB_CODE)
        );
    }
}
