//! Entity <-> form conversions.
//!
//! Rendering a form is infallible. Reading one back assumes the validators
//! already accepted it and reports a [`crate::MappingError`] otherwise.

pub mod duration;
pub mod genre;
mod imdb;
pub mod movie;
pub mod music;
mod parse;
pub mod show;
pub mod software;

pub use duration::DurationMapper;
pub use genre::{GenreMapper, GenreReferenceMapper};
pub use movie::MovieMapper;
pub use music::{MusicMapper, SongMapper};
pub use show::{EpisodeMapper, SeasonMapper, ShowMapper};
pub use software::{GameMapper, ProgramMapper};
