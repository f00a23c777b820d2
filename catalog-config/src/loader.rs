use std::path::{Path, PathBuf};

use catalog_core::ValidationBounds;
use catalog_core::validation::bounds::this_year;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{ValidationConfig, ValidationConfigSource};
use crate::validation::{self, ConfigGuardRailError, ConfigWarnings};

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("config file {path} does not exist")]
    MissingConfig { path: PathBuf },
    #[error("env file {path} does not exist")]
    MissingEnvFile { path: PathBuf },
    #[error("failed to load validation configuration: {0}")]
    Validation(#[source] anyhow::Error),
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

/// A loaded configuration that passed the guard rails.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ValidationConfig,
    pub bounds: ValidationBounds,
    pub source: ValidationConfigSource,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of consulting the environment.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        self.load_env_file()?;

        let (config, source) = match &self.config_path {
            Some(path) => (
                Self::load_explicit(path)?,
                ValidationConfigSource::Explicit(path.clone()),
            ),
            None => ValidationConfig::load_from_env()
                .map_err(ConfigLoadError::Validation)?,
        };

        Self::finish(config, source, this_year())
    }

    /// Guard rails and bounds resolution for an already parsed config.
    pub fn finish(
        config: ValidationConfig,
        source: ValidationConfigSource,
        clock_year: i32,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let warnings = validation::apply_guard_rails(&config, clock_year)?;
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => warn!(hint = %hint, "{}", warning.message),
                None => warn!("{}", warning.message),
            }
        }

        let bounds = ValidationBounds::new(
            config.min_year,
            config.current_year.unwrap_or(clock_year),
            config.max_imdb_code,
        );
        info!(
            source = %source,
            min_year = bounds.min_year,
            current_year = bounds.current_year,
            max_imdb_code = bounds.max_imdb_code,
            "validation bounds loaded"
        );

        Ok(ConfigLoad {
            config,
            bounds,
            source,
            warnings,
        })
    }

    fn load_explicit(path: &Path) -> Result<ValidationConfig, ConfigLoadError> {
        if !path.exists() {
            return Err(ConfigLoadError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        ValidationConfig::load_from_file(path)
            .map_err(ConfigLoadError::Validation)
    }

    /// An explicit env file must exist. The implicit `.env` lookup is
    /// skipped when there is none.
    fn load_env_file(&self) -> Result<(), ConfigLoadError> {
        match &self.env_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingEnvFile {
                        path: path.clone(),
                    });
                }
                dotenvy::from_path(path)?;
            }
            None => match dotenvy::dotenv() {
                Ok(_) => {}
                Err(dotenvy::Error::Io(_)) => {}
                Err(err) => return Err(err.into()),
            },
        }
        Ok(())
    }
}
