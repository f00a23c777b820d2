use crate::error::ModelError;
use crate::ids::GenreId;

/// A genre as edited on its own page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Genre {
    pub id: Option<GenreId>,
    pub name: String,
    pub position: Option<i32>,
}

/// A genre as attached to a movie or show.
///
/// `Reference` is what comes back from a submitted form: only the id is
/// known and the name must be resolved again before the owning title is
/// stored. `Full` is a genre loaded together with its title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        tag = "kind",
        rename_all = "camelCase",
        rename_all_fields = "camelCase"
    )
)]
pub enum GenreRef {
    Reference { id: GenreId },
    Full { id: GenreId, name: String },
}

impl GenreRef {
    pub fn reference(id: GenreId) -> Self {
        GenreRef::Reference { id }
    }

    pub fn id(&self) -> GenreId {
        match self {
            GenreRef::Reference { id } | GenreRef::Full { id, .. } => *id,
        }
    }

    /// Name of a hydrated genre; placeholders have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            GenreRef::Reference { .. } => None,
            GenreRef::Full { name, .. } => Some(name),
        }
    }

    pub fn is_hydrated(&self) -> bool {
        matches!(self, GenreRef::Full { .. })
    }
}

impl TryFrom<Genre> for GenreRef {
    type Error = ModelError;

    fn try_from(genre: Genre) -> Result<Self, Self::Error> {
        match genre.id {
            Some(id) => Ok(GenreRef::Full {
                id,
                name: genre.name,
            }),
            None => Err(ModelError::UnsavedGenre { name: genre.name }),
        }
    }
}
