use crate::forms::duration::DurationForm;
use crate::ids::{GenreId, MovieId, PictureId};
use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MovieForm {
    pub id: Option<MovieId>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub year: Option<String>,
    pub language: Option<Language>,
    pub subtitles: Vec<Language>,
    /// One entry per medium, in display order.
    pub media: Vec<DurationForm>,
    pub csfd: Option<String>,
    /// `true` when the title has an IMDB identifier.
    pub imdb: bool,
    pub imdb_code: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub picture: Option<PictureId>,
    pub note: Option<String>,
    pub position: Option<i32>,
    pub genres: Vec<GenreId>,
}
