use crate::genre::GenreRef;
use crate::ids::{MediumId, MovieId, PictureId};
use crate::language::Language;
use crate::numbers::Length;

/// One disc (or other physical part) of a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Medium {
    pub id: Option<MediumId>,
    /// 1-based position within the movie.
    pub number: u32,
    pub length: Length,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Movie {
    pub id: Option<MovieId>,
    pub czech_name: String,
    pub original_name: String,
    pub year: i32,
    pub language: Language,
    pub subtitles: Vec<Language>,
    pub media: Vec<Medium>,
    pub csfd: Option<String>,
    /// Values below 1 mean no IMDB identifier, see [`crate::NO_IMDB_CODE`].
    pub imdb_code: i32,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub picture: Option<PictureId>,
    pub note: Option<String>,
    pub position: Option<i32>,
    pub genres: Vec<GenreRef>,
}

impl Movie {
    /// Number media contiguously from 1 in their current order.
    pub fn renumber_media(&mut self) {
        for (index, medium) in self.media.iter_mut().enumerate() {
            medium.number = index as u32 + 1;
        }
    }
}
