use crate::forms::duration::DurationForm;
use crate::ids::{MusicId, SongId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MusicForm {
    pub id: Option<MusicId>,
    pub name: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: Option<String>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SongForm {
    pub id: Option<SongId>,
    pub name: Option<String>,
    pub length: Option<DurationForm>,
    pub note: Option<String>,
    pub position: Option<i32>,
}
