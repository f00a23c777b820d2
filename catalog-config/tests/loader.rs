use std::fs;

use catalog_config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, ValidationConfig,
    ValidationConfigSource,
};
use catalog_core::ValidationBounds;
use tempfile::TempDir;

/// Point the loader at an empty env file so the caller's `.env` stays out.
fn loader_in(dir: &TempDir) -> ConfigLoader {
    let env_file = dir.path().join("test.env");
    fs::write(&env_file, "").unwrap();
    ConfigLoader::new().with_env_file(env_file)
}

#[test]
fn explicit_toml_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("validation.toml");
    fs::write(&path, "min_year = 1950\ncurrent_year = 2020\n").unwrap();

    let load = loader_in(&dir).with_config_path(&path).load().unwrap();

    assert_eq!(load.source, ValidationConfigSource::Explicit(path));
    assert_eq!(load.bounds, ValidationBounds::new(1950, 2020, 9_999_999));
}

#[test]
fn explicit_json_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("validation.json");
    fs::write(&path, r#"{"max_imdb_code": 1000, "current_year": 2024}"#)
        .unwrap();

    let load = loader_in(&dir).with_config_path(&path).load().unwrap();
    assert_eq!(load.bounds.max_imdb_code, 1000);
    assert_eq!(load.config.current_year, Some(2024));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = loader_in(&dir).with_config_path(&path).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::MissingConfig { path: p } if p == path
    ));
}

#[test]
fn missing_explicit_env_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("validation.toml");
    fs::write(&config, "current_year = 2020\n").unwrap();
    let env_file = dir.path().join("absent.env");

    let err = ConfigLoader::new()
        .with_env_file(&env_file)
        .with_config_path(&config)
        .load()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::MissingEnvFile { ref path } if *path == env_file
    ));
    assert!(err.to_string().contains("absent.env"), "{err}");
}

#[test]
fn malformed_explicit_env_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("validation.toml");
    fs::write(&config, "current_year = 2020\n").unwrap();
    let env_file = dir.path().join("broken.env");
    fs::write(&env_file, "NOT A VALID LINE\n").unwrap();

    let err = ConfigLoader::new()
        .with_env_file(&env_file)
        .with_config_path(&config)
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::EnvFile(_)), "{err:?}");
}

#[test]
fn malformed_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("validation.toml");
    fs::write(&path, "min_year = \"soon\"\n").unwrap();

    let err = loader_in(&dir).with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::Validation(_)));
    assert!(
        format!("{err:#}").contains("validation.toml"),
        "{err:#}"
    );
}

#[test]
fn guard_rails_stop_impossible_bounds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("validation.toml");
    fs::write(&path, "min_year = 2030\ncurrent_year = 2020\n").unwrap();

    let err = loader_in(&dir).with_config_path(&path).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::EmptyYearRange {
            min_year: 2030,
            current_year: 2020
        })
    ));
}

#[test]
fn default_file_is_found_under_config_dir() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/validation.json");
    fs::write(&path, r#"{"min_year": 1940}"#).unwrap();

    let (config, source) =
        ValidationConfig::load_from_vars(|_| None, dir.path()).unwrap();
    assert_eq!(config.min_year, 1940);
    assert_eq!(source, ValidationConfigSource::File(path));
}

#[test]
fn env_path_wins_over_default_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("validation.toml"), "min_year = 1940\n")
        .unwrap();
    let other = dir.path().join("other.toml");
    fs::write(&other, "min_year = 1960\n").unwrap();

    let other_str = other.display().to_string();
    let (config, source) = ValidationConfig::load_from_vars(
        |key| (key == "CATALOG_VALIDATION_PATH").then(|| other_str.clone()),
        dir.path(),
    )
    .unwrap();
    assert_eq!(config.min_year, 1960);
    assert_eq!(source, ValidationConfigSource::EnvPath(other));
}

#[test]
fn finish_resolves_clock_year_when_unpinned() {
    let load = ConfigLoader::finish(
        ValidationConfig::default(),
        ValidationConfigSource::Default,
        2031,
    )
    .unwrap();
    assert_eq!(load.bounds.current_year, 2031);
    assert!(load.warnings.is_empty());
}
