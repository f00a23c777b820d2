use std::fmt;
use std::str::FromStr;

use catalog_model::forms::{
    BookForm, EpisodeForm, GameForm, GenreForm, MovieForm, MusicForm,
    ProgramForm, SeasonForm, ShowForm, SongForm,
};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::UnknownFormKind;
use crate::validation::bounds::ValidationBounds;
use crate::validation::report::ValidationReport;
use crate::validation::rules::{self, Rule, RuleDescription};

/// Every form type the registry holds a rule table for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Movie,
    Show,
    Season,
    Episode,
    Game,
    Music,
    Song,
    Program,
    Genre,
    Book,
}

impl FormKind {
    pub const ALL: [FormKind; 10] = [
        FormKind::Movie,
        FormKind::Show,
        FormKind::Season,
        FormKind::Episode,
        FormKind::Game,
        FormKind::Music,
        FormKind::Song,
        FormKind::Program,
        FormKind::Genre,
        FormKind::Book,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Movie => "movie",
            FormKind::Show => "show",
            FormKind::Season => "season",
            FormKind::Episode => "episode",
            FormKind::Game => "game",
            FormKind::Music => "music",
            FormKind::Song => "song",
            FormKind::Program => "program",
            FormKind::Genre => "genre",
            FormKind::Book => "book",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = UnknownFormKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFormKind(s.to_string()))
    }
}

/// A borrowed form tagged with its kind.
#[derive(Debug, Clone, Copy)]
pub enum FormRef<'a> {
    Movie(&'a MovieForm),
    Show(&'a ShowForm),
    Season(&'a SeasonForm),
    Episode(&'a EpisodeForm),
    Game(&'a GameForm),
    Music(&'a MusicForm),
    Song(&'a SongForm),
    Program(&'a ProgramForm),
    Genre(&'a GenreForm),
    Book(&'a BookForm),
}

impl FormRef<'_> {
    pub fn kind(&self) -> FormKind {
        match self {
            FormRef::Movie(_) => FormKind::Movie,
            FormRef::Show(_) => FormKind::Show,
            FormRef::Season(_) => FormKind::Season,
            FormRef::Episode(_) => FormKind::Episode,
            FormRef::Game(_) => FormKind::Game,
            FormRef::Music(_) => FormKind::Music,
            FormRef::Song(_) => FormKind::Song,
            FormRef::Program(_) => FormKind::Program,
            FormRef::Genre(_) => FormKind::Genre,
            FormRef::Book(_) => FormKind::Book,
        }
    }
}

macro_rules! form_ref_from {
    ($($variant:ident => $form:ty),+ $(,)?) => {
        $(
            impl<'a> From<&'a $form> for FormRef<'a> {
                fn from(form: &'a $form) -> Self {
                    FormRef::$variant(form)
                }
            }
        )+
    };
}

form_ref_from! {
    Movie => MovieForm,
    Show => ShowForm,
    Season => SeasonForm,
    Episode => EpisodeForm,
    Game => GameForm,
    Music => MusicForm,
    Song => SongForm,
    Program => ProgramForm,
    Genre => GenreForm,
    Book => BookForm,
}

/// Ordered rule tables for every form kind, built once from the process-wide
/// [`ValidationBounds`] and shared read-only afterwards.
///
/// ```
/// use catalog_core::{FormRef, ValidationBounds, ValidatorRegistry};
/// use catalog_model::forms::GenreForm;
///
/// let registry = ValidatorRegistry::new(ValidationBounds::current());
/// let report = registry.validate(FormRef::Genre(&GenreForm::default()));
/// assert!(!report.is_valid());
/// ```
#[derive(Debug)]
pub struct ValidatorRegistry {
    bounds: ValidationBounds,
    movie: Vec<Rule<MovieForm>>,
    show: Vec<Rule<ShowForm>>,
    season: Vec<Rule<SeasonForm>>,
    episode: Vec<Rule<EpisodeForm>>,
    game: Vec<Rule<GameForm>>,
    music: Vec<Rule<MusicForm>>,
    song: Vec<Rule<SongForm>>,
    program: Vec<Rule<ProgramForm>>,
    genre: Vec<Rule<GenreForm>>,
    book: Vec<Rule<BookForm>>,
}

impl ValidatorRegistry {
    pub fn new(bounds: ValidationBounds) -> Self {
        let registry = Self {
            bounds,
            movie: rules::movie(&bounds),
            show: rules::show(&bounds),
            season: rules::season(&bounds),
            episode: rules::episode(),
            game: rules::game(),
            music: rules::music(),
            song: rules::song(),
            program: rules::program(),
            genre: rules::genre(),
            book: rules::book(),
        };

        debug!(
            min_year = bounds.min_year,
            current_year = bounds.current_year,
            max_imdb_code = bounds.max_imdb_code,
            "validator registry built"
        );
        registry
    }

    pub fn bounds(&self) -> &ValidationBounds {
        &self.bounds
    }

    /// Run every rule registered for the form's kind, in order.
    pub fn validate<'a>(
        &self,
        form: impl Into<FormRef<'a>>,
    ) -> ValidationReport {
        let form = form.into();
        let kind = form.kind();

        let report = match form {
            FormRef::Movie(form) => run(kind, &self.movie, form),
            FormRef::Show(form) => run(kind, &self.show, form),
            FormRef::Season(form) => run(kind, &self.season, form),
            FormRef::Episode(form) => run(kind, &self.episode, form),
            FormRef::Game(form) => run(kind, &self.game, form),
            FormRef::Music(form) => run(kind, &self.music, form),
            FormRef::Song(form) => run(kind, &self.song, form),
            FormRef::Program(form) => run(kind, &self.program, form),
            FormRef::Genre(form) => run(kind, &self.genre, form),
            FormRef::Book(form) => run(kind, &self.book, form),
        };

        if !report.is_valid() {
            debug!(
                form = %kind,
                violations = report.len(),
                "form rejected"
            );
        }
        report
    }

    /// The rules registered for `kind`, in the order they run.
    pub fn rules(&self, kind: FormKind) -> Vec<RuleDescription> {
        match kind {
            FormKind::Movie => describe(&self.movie),
            FormKind::Show => describe(&self.show),
            FormKind::Season => describe(&self.season),
            FormKind::Episode => describe(&self.episode),
            FormKind::Game => describe(&self.game),
            FormKind::Music => describe(&self.music),
            FormKind::Song => describe(&self.song),
            FormKind::Program => describe(&self.program),
            FormKind::Genre => describe(&self.genre),
            FormKind::Book => describe(&self.book),
        }
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new(ValidationBounds::default())
    }
}

fn run<F: 'static>(
    kind: FormKind,
    rules: &[Rule<F>],
    form: &F,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    for rule in rules {
        let failed = rule.failures(form);
        trace!(
            form = %kind,
            rule = rule.path(),
            constraint = %rule.constraint(),
            passed = failed.is_empty(),
            "rule checked"
        );
        for path in failed {
            report.push(path, rule.constraint().clone());
        }
    }
    report
}

fn describe<F: 'static>(rules: &[Rule<F>]) -> Vec<RuleDescription> {
    rules.iter().map(Rule::describe).collect()
}
