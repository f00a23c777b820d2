//! Glob-importable set of the types every mapper and validator touches.

pub use crate::forms::{
    BookForm, DurationForm, EpisodeForm, GameForm, GenreForm, MovieForm,
    MusicForm, ProgramForm, SeasonForm, ShowForm, SongForm,
};
pub use crate::genre::{Genre, GenreRef};
pub use crate::ids::*;
pub use crate::language::Language;
pub use crate::movie::{Medium, Movie};
pub use crate::music::{Music, Song};
pub use crate::numbers::{Length, NO_IMDB_CODE};
pub use crate::show::{Episode, Season, Show};
pub use crate::software::{Game, Program};
