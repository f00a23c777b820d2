use crate::ids::{MusicId, SongId};
use crate::numbers::Length;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Music {
    pub id: Option<MusicId>,
    pub name: String,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: i32,
    pub note: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Song {
    pub id: Option<SongId>,
    pub name: String,
    pub length: Length,
    pub note: Option<String>,
    pub position: Option<i32>,
}
