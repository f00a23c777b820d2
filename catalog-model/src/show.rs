use crate::genre::GenreRef;
use crate::ids::{EpisodeId, PictureId, SeasonId, ShowId};
use crate::language::Language;
use crate::numbers::Length;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Show {
    pub id: Option<ShowId>,
    pub czech_name: String,
    pub original_name: String,
    pub csfd: Option<String>,
    /// Values below 1 mean no IMDB identifier.
    pub imdb_code: i32,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub picture: Option<PictureId>,
    pub note: Option<String>,
    pub position: Option<i32>,
    pub genres: Vec<GenreRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Season {
    pub id: Option<SeasonId>,
    pub number: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub language: Language,
    pub subtitles: Vec<Language>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Episode {
    pub id: Option<EpisodeId>,
    pub number: i32,
    pub name: String,
    pub length: Length,
    pub note: Option<String>,
    pub position: Option<i32>,
}
