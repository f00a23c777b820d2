//! Single-value and cross-field constraints.
//!
//! Every check here is a total function: malformed input makes a check fail
//! (or defer, where noted), never panic.

use std::fmt;

use catalog_contracts::constraint::Constraint;
use catalog_contracts::form_like::{ImdbSelection, LanguageSelection, YearSpan};
use catalog_model::forms::DurationForm;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}$").expect("year regex should compile")
});

static IMDB_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,7}$").expect("imdb code regex should compile")
});

/// What a failed rule was checking, as reported in a violation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(
    tag = "kind",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ConstraintKind {
    NotBlank,
    Range { min: i64, max: i64 },
    Required,
    NonEmpty,
    DateRange { min: i32, max: i32 },
    ImdbCode { max: i32 },
    ImdbPresence,
    LanguageSelection,
    DurationPositivity,
    YearRange,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBlank => f.write_str("must not be blank"),
            Self::Range { min, max } => {
                write!(f, "must be a whole number between {min} and {max}")
            }
            Self::Required => f.write_str("is required"),
            Self::NonEmpty => f.write_str("must not be empty"),
            Self::DateRange { min, max } => {
                write!(f, "must be a four digit year between {min} and {max}")
            }
            Self::ImdbCode { max } => {
                write!(f, "must be an IMDB code between 1 and {max}")
            }
            Self::ImdbPresence => {
                f.write_str("IMDB code is required when IMDB is checked")
            }
            Self::LanguageSelection => {
                f.write_str("at least one language must be selected")
            }
            Self::DurationPositivity => f.write_str("length must be positive"),
            Self::YearRange => {
                f.write_str("start year must not be after end year")
            }
        }
    }
}

/// A constraint that can name itself in a report.
pub trait Describe {
    fn describe(&self) -> ConstraintKind;
}

fn parse_year(value: &str, min: i32, max: i32) -> Option<i32> {
    if !YEAR_PATTERN.is_match(value) {
        return None;
    }
    value
        .parse::<i32>()
        .ok()
        .filter(|year| (min..=max).contains(year))
}

/// A four digit year no earlier than `min` and no later than `max`, which is
/// the current year when built from [`crate::ValidationBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub min: i32,
    pub max: i32,
}

impl DateRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Constraint<str> for DateRange {
    fn is_valid(&self, value: Option<&str>) -> bool {
        value
            .and_then(|year| parse_year(year, self.min, self.max))
            .is_some()
    }
}

impl Describe for DateRange {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::DateRange {
            min: self.min,
            max: self.max,
        }
    }
}

/// Optional IMDB code: empty is fine, otherwise 1 to 7 digits within
/// `1..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImdbCode {
    pub max: i32,
}

impl ImdbCode {
    pub fn new(max: i32) -> Self {
        Self { max }
    }
}

impl Constraint<str> for ImdbCode {
    fn is_valid(&self, value: Option<&str>) -> bool {
        match value {
            None | Some("") => true,
            Some(code) => {
                IMDB_CODE_PATTERN.is_match(code)
                    && code
                        .parse::<i32>()
                        .is_ok_and(|code| (1..=self.max).contains(&code))
            }
        }
    }
}

impl Describe for ImdbCode {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::ImdbCode { max: self.max }
    }
}

/// A checked IMDB box needs a non-blank code next to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImdbPresence;

impl<F: ImdbSelection + ?Sized> Constraint<F> for ImdbPresence {
    fn is_valid(&self, form: Option<&F>) -> bool {
        form.is_some_and(|form| {
            !form.imdb()
                || form.imdb_code().is_some_and(|code| !code.trim().is_empty())
        })
    }
}

impl Describe for ImdbPresence {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::ImdbPresence
    }
}

/// At least one of the language checkboxes is ticked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageChoice;

impl<F: LanguageSelection + ?Sized> Constraint<F> for LanguageChoice {
    fn is_valid(&self, form: Option<&F>) -> bool {
        form.is_some_and(|form| form.czech() || form.english())
    }
}

impl Describe for LanguageChoice {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::LanguageSelection
    }
}

/// A fully specified length must not add up to zero.
///
/// Any absent or blank part means the length is not filled in yet and
/// passes. A part that is present but not a number also passes; the range
/// rule on that part reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationPositivity;

impl Constraint<DurationForm> for DurationPositivity {
    fn is_valid(&self, form: Option<&DurationForm>) -> bool {
        let Some(form) = form else {
            return false;
        };
        if form.is_partially_blank() {
            return true;
        }

        let parts = [&form.hours, &form.minutes, &form.seconds]
            .map(|part| part.as_deref().and_then(|s| s.parse::<i64>().ok()));
        match parts {
            [Some(hours), Some(minutes), Some(seconds)] => {
                hours.saturating_add(minutes).saturating_add(seconds) > 0
            }
            _ => true,
        }
    }
}

impl Describe for DurationPositivity {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::DurationPositivity
    }
}

/// Start year not after end year. Only checked once both years pass
/// [`DateRange`] on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl<F: YearSpan + ?Sized> Constraint<F> for YearRange {
    fn is_valid(&self, form: Option<&F>) -> bool {
        let Some(form) = form else {
            return true;
        };
        let start = form
            .start_year()
            .and_then(|year| parse_year(year, self.min, self.max));
        let end = form
            .end_year()
            .and_then(|year| parse_year(year, self.min, self.max));

        match (start, end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}

impl Describe for YearRange {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::YearRange
    }
}

/// Present and not only whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotBlank;

impl Constraint<str> for NotBlank {
    fn is_valid(&self, value: Option<&str>) -> bool {
        value.is_some_and(|value| !value.trim().is_empty())
    }
}

impl Describe for NotBlank {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::NotBlank
    }
}

/// A numeric text field within `min..=max`. Absent passes, anything that is
/// not a plain integer fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Constraint<str> for IntRange {
    fn is_valid(&self, value: Option<&str>) -> bool {
        value.is_none_or(|value| {
            value
                .parse::<i64>()
                .is_ok_and(|number| (self.min..=self.max).contains(&number))
        })
    }
}

impl Describe for IntRange {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::Range {
            min: self.min,
            max: self.max,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Required;

impl<T: ?Sized> Constraint<T> for Required {
    fn is_valid(&self, value: Option<&T>) -> bool {
        value.is_some()
    }
}

impl Describe for Required {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::Required
    }
}

/// Present with at least one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonEmpty;

impl<T> Constraint<[T]> for NonEmpty {
    fn is_valid(&self, value: Option<&[T]>) -> bool {
        value.is_some_and(|items| !items.is_empty())
    }
}

impl Describe for NonEmpty {
    fn describe(&self) -> ConstraintKind {
        ConstraintKind::NonEmpty
    }
}
