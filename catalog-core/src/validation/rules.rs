//! Ordered rule tables, one per form kind.
//!
//! Field rules come first in field declaration order, nested length rules
//! follow the field that holds them, and rules over the whole form run last.

use std::fmt;

use catalog_contracts::constraint::Constraint;
use catalog_model::forms::{
    BookForm, DurationForm, EpisodeForm, GameForm, GenreForm, MovieForm,
    MusicForm, ProgramForm, SeasonForm, ShowForm, SongForm,
};
use serde::Serialize;

use crate::validation::bounds::ValidationBounds;
use crate::validation::constraints::{
    ConstraintKind, DateRange, Describe, DurationPositivity, ImdbCode,
    ImdbPresence, IntRange, LanguageChoice, NonEmpty, NotBlank, Required,
    YearRange,
};

type Check<F> = Box<dyn Fn(&F, &mut Vec<String>) + Send + Sync>;

/// Lengths nested in a form, each with the path prefix it is reported under.
type Nested<F> = fn(&F) -> Vec<(String, &DurationForm)>;

/// A registered rule as listed by [`crate::ValidatorRegistry::rules`].
///
/// Paths of rules applied to every list element use `[]` in place of the
/// index, e.g. `media[].hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDescription {
    pub path: String,
    pub constraint: ConstraintKind,
}

impl fmt::Display for RuleDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "(form)"
        } else {
            self.path.as_str()
        };
        write!(f, "{path}: {}", self.constraint)
    }
}

pub(crate) struct Rule<F> {
    path: String,
    constraint: ConstraintKind,
    check: Check<F>,
}

impl<F> fmt::Debug for Rule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("path", &self.path)
            .field("constraint", &self.constraint)
            .finish_non_exhaustive()
    }
}

impl<F: 'static> Rule<F> {
    fn new(
        path: String,
        constraint: ConstraintKind,
        check: impl Fn(&F, &mut Vec<String>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            path,
            constraint,
            check: Box::new(check),
        }
    }

    /// Check one field of the form.
    fn field<T, C, G>(path: &'static str, constraint: C, get: G) -> Self
    where
        T: ?Sized + 'static,
        C: Constraint<T> + Describe + Send + Sync + 'static,
        G: Fn(&F) -> Option<&T> + Send + Sync + 'static,
    {
        Self::new(
            path.to_string(),
            constraint.describe(),
            move |form: &F, failed: &mut Vec<String>| {
                if !constraint.is_valid(get(form)) {
                    failed.push(path.to_string());
                }
            },
        )
    }

    /// Check the form as a whole.
    fn object<C>(constraint: C) -> Self
    where
        C: Constraint<F> + Describe + Send + Sync + 'static,
    {
        Self::new(
            String::new(),
            constraint.describe(),
            move |form: &F, failed: &mut Vec<String>| {
                if !constraint.is_valid(Some(form)) {
                    failed.push(String::new());
                }
            },
        )
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn constraint(&self) -> &ConstraintKind {
        &self.constraint
    }

    pub(crate) fn describe(&self) -> RuleDescription {
        RuleDescription {
            path: self.path.clone(),
            constraint: self.constraint.clone(),
        }
    }

    /// Paths at which the form fails this rule; empty when it passes.
    pub(crate) fn failures(&self, form: &F) -> Vec<String> {
        let mut failed = Vec::new();
        (self.check)(form, &mut failed);
        failed
    }
}

type Part = fn(&DurationForm) -> Option<&str>;

/// Presence, range and positivity for every length `get` yields.
fn durations<F: 'static>(
    pattern: &'static str,
    get: Nested<F>,
) -> Vec<Rule<F>> {
    let parts: [(&'static str, IntRange, Part); 3] = [
        ("hours", IntRange::new(0, 23), |d| d.hours.as_deref()),
        ("minutes", IntRange::new(0, 59), |d| d.minutes.as_deref()),
        ("seconds", IntRange::new(0, 59), |d| d.seconds.as_deref()),
    ];

    let mut rules: Vec<Rule<F>> = Vec::with_capacity(parts.len() * 2 + 1);
    for (name, range, part) in parts {
        rules.push(Rule::new(
            format!("{pattern}.{name}"),
            Required.describe(),
            move |form: &F, failed: &mut Vec<String>| {
                for (prefix, duration) in get(form) {
                    if part(duration).is_none() {
                        failed.push(format!("{prefix}.{name}"));
                    }
                }
            },
        ));
        rules.push(Rule::new(
            format!("{pattern}.{name}"),
            range.describe(),
            move |form: &F, failed: &mut Vec<String>| {
                for (prefix, duration) in get(form) {
                    if !range.is_valid(part(duration)) {
                        failed.push(format!("{prefix}.{name}"));
                    }
                }
            },
        ));
    }

    rules.push(Rule::new(
        pattern.to_string(),
        DurationPositivity.describe(),
        move |form: &F, failed: &mut Vec<String>| {
            for (prefix, duration) in get(form) {
                if !DurationPositivity.is_valid(Some(duration)) {
                    failed.push(prefix);
                }
            }
        },
    ));
    rules
}

fn length_of(length: Option<&DurationForm>) -> Vec<(String, &DurationForm)> {
    length
        .map(|length| ("length".to_string(), length))
        .into_iter()
        .collect()
}

pub(crate) fn movie(bounds: &ValidationBounds) -> Vec<Rule<MovieForm>> {
    let years = DateRange::new(bounds.min_year, bounds.current_year);

    let mut rules: Vec<Rule<MovieForm>> = vec![
        Rule::field("czechName", NotBlank, |f: &MovieForm| {
            f.czech_name.as_deref()
        }),
        Rule::field("originalName", NotBlank, |f: &MovieForm| {
            f.original_name.as_deref()
        }),
        Rule::field("year", years, |f: &MovieForm| f.year.as_deref()),
        Rule::field("language", Required, |f: &MovieForm| {
            f.language.as_ref()
        }),
        Rule::field("media", NonEmpty, |f: &MovieForm| {
            Some(f.media.as_slice())
        }),
    ];
    rules.extend(durations::<MovieForm>("media[]", |f| {
        f.media
            .iter()
            .enumerate()
            .map(|(index, medium)| (format!("media[{index}]"), medium))
            .collect()
    }));
    rules.extend([
        Rule::field(
            "imdbCode",
            ImdbCode::new(bounds.max_imdb_code),
            |f: &MovieForm| f.imdb_code.as_deref(),
        ),
        Rule::field("genres", NonEmpty, |f: &MovieForm| {
            Some(f.genres.as_slice())
        }),
        Rule::object(ImdbPresence),
    ]);
    rules
}

pub(crate) fn show(bounds: &ValidationBounds) -> Vec<Rule<ShowForm>> {
    vec![
        Rule::field("czechName", NotBlank, |f: &ShowForm| {
            f.czech_name.as_deref()
        }),
        Rule::field("originalName", NotBlank, |f: &ShowForm| {
            f.original_name.as_deref()
        }),
        Rule::field(
            "imdbCode",
            ImdbCode::new(bounds.max_imdb_code),
            |f: &ShowForm| f.imdb_code.as_deref(),
        ),
        Rule::field("genres", NonEmpty, |f: &ShowForm| {
            Some(f.genres.as_slice())
        }),
        Rule::object(ImdbPresence),
    ]
}

pub(crate) fn season(bounds: &ValidationBounds) -> Vec<Rule<SeasonForm>> {
    let years = DateRange::new(bounds.min_year, bounds.current_year);

    vec![
        Rule::field("number", Required, |f: &SeasonForm| f.number.as_deref()),
        Rule::field("number", IntRange::new(1, 100), |f: &SeasonForm| {
            f.number.as_deref()
        }),
        Rule::field("startYear", years, |f: &SeasonForm| {
            f.start_year.as_deref()
        }),
        Rule::field("endYear", years, |f: &SeasonForm| f.end_year.as_deref()),
        Rule::field("language", Required, |f: &SeasonForm| {
            f.language.as_ref()
        }),
        Rule::object(YearRange::new(bounds.min_year, bounds.current_year)),
    ]
}

pub(crate) fn episode() -> Vec<Rule<EpisodeForm>> {
    let mut rules: Vec<Rule<EpisodeForm>> = vec![
        Rule::field("number", Required, |f: &EpisodeForm| {
            f.number.as_deref()
        }),
        Rule::field("number", IntRange::new(1, 500), |f: &EpisodeForm| {
            f.number.as_deref()
        }),
        Rule::field("name", NotBlank, |f: &EpisodeForm| f.name.as_deref()),
        Rule::field("length", Required, |f: &EpisodeForm| {
            f.length.as_ref()
        }),
    ];
    rules.extend(durations::<EpisodeForm>("length", |f| {
        length_of(f.length.as_ref())
    }));
    rules
}

pub(crate) fn game() -> Vec<Rule<GameForm>> {
    vec![
        Rule::field("name", NotBlank, |f: &GameForm| f.name.as_deref()),
        Rule::field("mediaCount", Required, |f: &GameForm| {
            f.media_count.as_deref()
        }),
        Rule::field("mediaCount", IntRange::new(1, 100), |f: &GameForm| {
            f.media_count.as_deref()
        }),
    ]
}

pub(crate) fn music() -> Vec<Rule<MusicForm>> {
    vec![
        Rule::field("name", NotBlank, |f: &MusicForm| f.name.as_deref()),
        Rule::field("mediaCount", Required, |f: &MusicForm| {
            f.media_count.as_deref()
        }),
        Rule::field("mediaCount", IntRange::new(1, 100), |f: &MusicForm| {
            f.media_count.as_deref()
        }),
    ]
}

pub(crate) fn song() -> Vec<Rule<SongForm>> {
    let mut rules: Vec<Rule<SongForm>> = vec![
        Rule::field("name", NotBlank, |f: &SongForm| f.name.as_deref()),
        Rule::field("length", Required, |f: &SongForm| f.length.as_ref()),
    ];
    rules.extend(durations::<SongForm>("length", |f| {
        length_of(f.length.as_ref())
    }));
    rules
}

pub(crate) fn program() -> Vec<Rule<ProgramForm>> {
    vec![
        Rule::field("name", NotBlank, |f: &ProgramForm| f.name.as_deref()),
        Rule::field("mediaCount", Required, |f: &ProgramForm| {
            f.media_count.as_deref()
        }),
        Rule::field("mediaCount", IntRange::new(1, 100), |f: &ProgramForm| {
            f.media_count.as_deref()
        }),
    ]
}

pub(crate) fn genre() -> Vec<Rule<GenreForm>> {
    vec![Rule::field("name", NotBlank, |f: &GenreForm| f.name.as_deref())]
}

pub(crate) fn book() -> Vec<Rule<BookForm>> {
    vec![
        Rule::field("author", NotBlank, |f: &BookForm| f.author.as_deref()),
        Rule::field("title", NotBlank, |f: &BookForm| f.title.as_deref()),
        Rule::object(LanguageChoice),
    ]
}
