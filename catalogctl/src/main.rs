//! `catalogctl`: run catalog forms through the validators and mappers from
//! the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use catalog_config::ConfigLoader;
use catalog_core::{FormKind, ValidatorRegistry};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(
    name = "catalogctl",
    version,
    about = "Validate catalog forms and map them to and from entities"
)]
struct Cli {
    /// Validation bounds file (TOML or JSON); defaults to the environment
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Env file read before the environment is consulted
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a form JSON file
    Check {
        kind: FormKind,
        file: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a form JSON file and print the entity it maps to
    ToEntity { kind: FormKind, file: PathBuf },
    /// Print the edit form for an entity JSON file
    ToForm { kind: FormKind, file: PathBuf },
    /// List the rules registered for a form kind
    Rules {
        kind: FormKind,
        /// Print the rules as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let load = loader.load().context("failed to load validation bounds")?;
    let registry = ValidatorRegistry::new(load.bounds);
    let bounds = registry.bounds();
    info!(
        source = %load.source,
        min_year = bounds.min_year,
        current_year = bounds.current_year,
        max_imdb_code = bounds.max_imdb_code,
        "catalogctl ready"
    );

    debug!(command = ?cli.command, "dispatching command");
    match cli.command {
        Command::Check { kind, file, json } => {
            commands::check(&registry, kind, &file, json)
        }
        Command::ToEntity { kind, file } => {
            commands::to_entity(&registry, kind, &file)
        }
        Command::ToForm { kind, file } => commands::to_form(kind, &file),
        Command::Rules { kind, json } => commands::rules(&registry, kind, json),
    }
}
