use crate::ids::{GameId, ProgramId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GameForm {
    pub id: Option<GameId>,
    pub name: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: Option<String>,
    pub crack: bool,
    pub serial_key: bool,
    pub patch: bool,
    pub trainer: bool,
    pub trainer_data: bool,
    pub editor: bool,
    pub saves: bool,
    pub other_data: Option<String>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ProgramForm {
    pub id: Option<ProgramId>,
    pub name: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: Option<String>,
    pub crack: bool,
    pub serial_key: bool,
    pub other_data: Option<String>,
    pub note: Option<String>,
    pub position: Option<i32>,
}
