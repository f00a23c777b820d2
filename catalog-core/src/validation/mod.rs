//! Form validation: single-value constraints, cross-field rules, and the
//! registry that runs them per form kind.

pub mod bounds;
pub mod constraints;
pub mod registry;
pub mod report;
mod rules;

pub use bounds::{MAX_IMDB_CODE, MIN_YEAR, ValidationBounds};
pub use constraints::{
    ConstraintKind, DateRange, Describe, DurationPositivity, ImdbCode,
    ImdbPresence, IntRange, LanguageChoice, NonEmpty, NotBlank, Required,
    YearRange,
};
pub use registry::{FormKind, FormRef, ValidatorRegistry};
pub use report::{ValidationReport, Violation};
pub use rules::RuleDescription;
