use crate::forms::duration::DurationForm;
use crate::ids::{EpisodeId, GenreId, PictureId, SeasonId, ShowId};
use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ShowForm {
    pub id: Option<ShowId>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub csfd: Option<String>,
    pub imdb: bool,
    pub imdb_code: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub picture: Option<PictureId>,
    pub note: Option<String>,
    pub position: Option<i32>,
    pub genres: Vec<GenreId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SeasonForm {
    pub id: Option<SeasonId>,
    pub number: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    pub language: Option<Language>,
    pub subtitles: Vec<Language>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EpisodeForm {
    pub id: Option<EpisodeId>,
    pub number: Option<String>,
    pub name: Option<String>,
    pub length: Option<DurationForm>,
    pub note: Option<String>,
    pub position: Option<i32>,
}
