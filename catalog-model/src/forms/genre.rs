use crate::ids::GenreId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GenreForm {
    pub id: Option<GenreId>,
    pub name: Option<String>,
    pub position: Option<i32>,
}
