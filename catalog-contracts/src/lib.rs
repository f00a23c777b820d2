//! Trait surfaces that describe how catalog forms are mapped and checked.

pub mod constraint;
pub mod form_like;
pub mod mapper;

/// Frequently used traits for mapper and validator implementations.
pub mod prelude {
    pub use super::constraint::Constraint;
    pub use super::form_like::{ImdbSelection, LanguageSelection, YearSpan};
    pub use super::mapper::FormMapper;
}
