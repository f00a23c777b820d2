//! Entity and form-object definitions shared across catalog crates.
#![allow(missing_docs)]

pub mod error;
pub mod forms;
pub mod genre;
pub mod ids;
pub mod language;
pub mod movie;
pub mod music;
pub mod numbers;
pub mod prelude;
pub mod show;
pub mod software;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use forms::{
    BookForm, DurationForm, EpisodeForm, GameForm, GenreForm, MovieForm,
    MusicForm, ProgramForm, SeasonForm, ShowForm, SongForm,
};
pub use genre::{Genre, GenreRef};
pub use ids::{
    BookId, EpisodeId, GameId, GenreId, MediumId, MovieId, MusicId, PictureId,
    ProgramId, SeasonId, ShowId, SongId,
};
pub use language::Language;
pub use movie::{Medium, Movie};
pub use music::{Music, Song};
pub use numbers::{Length, NO_IMDB_CODE};
pub use show::{Episode, Season, Show};
pub use software::{Game, Program};
