use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use catalog_contracts::prelude::*;
use catalog_core::{
    EpisodeMapper, FormKind, FormRef, GameMapper, GenreMapper, MappingError,
    MovieMapper, MusicMapper, ProgramMapper, SeasonMapper, ShowMapper,
    SongMapper, SubmitError, ValidationReport, ValidatorRegistry, submit,
};
use catalog_model::forms::{
    BookForm, EpisodeForm, GameForm, GenreForm, MovieForm, MusicForm,
    ProgramForm, SeasonForm, ShowForm, SongForm,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

const INVALID: u8 = 1;
const NO_BOOK_MAPPER: &str =
    "book forms are validated only; there is no book mapper";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(report: &ValidationReport) {
    for violation in report {
        eprintln!("{violation}");
    }
}

fn validate_file<F>(
    registry: &ValidatorRegistry,
    path: &Path,
) -> Result<ValidationReport>
where
    F: DeserializeOwned,
    for<'a> &'a F: Into<FormRef<'a>>,
{
    let form: F = read_json(path)?;
    Ok(registry.validate(&form))
}

pub fn check(
    registry: &ValidatorRegistry,
    kind: FormKind,
    path: &Path,
    json: bool,
) -> Result<ExitCode> {
    let report = match kind {
        FormKind::Movie => validate_file::<MovieForm>(registry, path)?,
        FormKind::Show => validate_file::<ShowForm>(registry, path)?,
        FormKind::Season => validate_file::<SeasonForm>(registry, path)?,
        FormKind::Episode => validate_file::<EpisodeForm>(registry, path)?,
        FormKind::Game => validate_file::<GameForm>(registry, path)?,
        FormKind::Music => validate_file::<MusicForm>(registry, path)?,
        FormKind::Song => validate_file::<SongForm>(registry, path)?,
        FormKind::Program => validate_file::<ProgramForm>(registry, path)?,
        FormKind::Genre => validate_file::<GenreForm>(registry, path)?,
        FormKind::Book => validate_file::<BookForm>(registry, path)?,
    };

    if json {
        print_json(&report)?;
    } else if report.is_valid() {
        println!("{kind} form is valid");
    } else {
        println!("{kind} form has {} violation(s)", report.len());
        for violation in &report {
            println!("  {violation}");
        }
    }

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(INVALID)
    })
}

fn submit_file<M>(
    registry: &ValidatorRegistry,
    mapper: &M,
    path: &Path,
) -> Result<ExitCode>
where
    M: FormMapper<Error = MappingError>,
    M::Form: DeserializeOwned,
    M::Entity: Serialize,
    for<'a> &'a M::Form: Into<FormRef<'a>>,
{
    let form: M::Form = read_json(path)?;
    match submit(registry, mapper, &form) {
        Ok(entity) => {
            print_json(&entity)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(SubmitError::Invalid(report)) => {
            eprintln!("form rejected with {} violation(s)", report.len());
            print_report(&report);
            Ok(ExitCode::from(INVALID))
        }
        Err(err @ SubmitError::Mapping(_)) => Err(err.into()),
    }
}

pub fn to_entity(
    registry: &ValidatorRegistry,
    kind: FormKind,
    path: &Path,
) -> Result<ExitCode> {
    match kind {
        FormKind::Movie => submit_file(registry, &MovieMapper::default(), path),
        FormKind::Show => submit_file(registry, &ShowMapper::default(), path),
        FormKind::Season => submit_file(registry, &SeasonMapper, path),
        FormKind::Episode => {
            submit_file(registry, &EpisodeMapper::default(), path)
        }
        FormKind::Game => submit_file(registry, &GameMapper, path),
        FormKind::Music => submit_file(registry, &MusicMapper, path),
        FormKind::Song => submit_file(registry, &SongMapper::default(), path),
        FormKind::Program => submit_file(registry, &ProgramMapper, path),
        FormKind::Genre => submit_file(registry, &GenreMapper, path),
        FormKind::Book => bail!(NO_BOOK_MAPPER),
    }
}

fn render_file<M>(mapper: &M, path: &Path) -> Result<ExitCode>
where
    M: FormMapper,
    M::Entity: DeserializeOwned,
    M::Form: Serialize,
{
    let entity: M::Entity = read_json(path)?;
    print_json(&mapper.to_form(&entity))?;
    Ok(ExitCode::SUCCESS)
}

pub fn to_form(kind: FormKind, path: &Path) -> Result<ExitCode> {
    match kind {
        FormKind::Movie => render_file(&MovieMapper::default(), path),
        FormKind::Show => render_file(&ShowMapper::default(), path),
        FormKind::Season => render_file(&SeasonMapper, path),
        FormKind::Episode => render_file(&EpisodeMapper::default(), path),
        FormKind::Game => render_file(&GameMapper, path),
        FormKind::Music => render_file(&MusicMapper, path),
        FormKind::Song => render_file(&SongMapper::default(), path),
        FormKind::Program => render_file(&ProgramMapper, path),
        FormKind::Genre => render_file(&GenreMapper, path),
        FormKind::Book => bail!(NO_BOOK_MAPPER),
    }
}

pub fn rules(
    registry: &ValidatorRegistry,
    kind: FormKind,
    json: bool,
) -> Result<ExitCode> {
    let rules = registry.rules(kind);
    if json {
        print_json(&rules)?;
    } else {
        for rule in &rules {
            println!("{rule}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
