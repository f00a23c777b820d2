use crate::ids::BookId;

/// Book form: the languages a copy is available in are two checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct BookForm {
    pub id: Option<BookId>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub czech: bool,
    pub english: bool,
    pub note: Option<String>,
    pub position: Option<i32>,
}
