use catalog_contracts::mapper::FormMapper;
use catalog_model::forms::GenreForm;
use catalog_model::genre::{Genre, GenreRef};
use catalog_model::ids::GenreId;

use crate::error::{MappingError, Result};
use crate::mapper::parse::required;

/// Maps a genre attached to a title to the bare id posted by a form and back.
///
/// The way back only yields a [`GenreRef::Reference`] placeholder: a name
/// cannot be recovered from an id, so callers resolve it again before
/// storing the owning title.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreReferenceMapper;

impl GenreReferenceMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn to_reference(&self, genre: Option<&GenreRef>) -> Option<GenreId> {
        genre.map(GenreRef::id)
    }

    pub fn to_genre(&self, id: Option<GenreId>) -> Option<GenreRef> {
        id.map(GenreRef::reference)
    }

    pub(crate) fn to_references(&self, genres: &[GenreRef]) -> Vec<GenreId> {
        genres.iter().map(GenreRef::id).collect()
    }

    pub(crate) fn to_genres(&self, ids: &[GenreId]) -> Vec<GenreRef> {
        ids.iter().copied().map(GenreRef::reference).collect()
    }
}

/// Maps a genre edited on its own page.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreMapper;

impl FormMapper for GenreMapper {
    type Entity = Genre;
    type Form = GenreForm;
    type Error = MappingError;

    fn to_form(&self, genre: &Genre) -> GenreForm {
        GenreForm {
            id: genre.id,
            name: Some(genre.name.clone()),
            position: genre.position,
        }
    }

    fn to_entity(&self, form: &GenreForm) -> Result<Genre> {
        Ok(Genre {
            id: form.id,
            name: required(&form.name, "name")?,
            position: form.position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_keeps_only_the_id() {
        let mapper = GenreReferenceMapper;
        let full = GenreRef::Full {
            id: GenreId(5),
            name: "Drama".to_string(),
        };

        assert_eq!(mapper.to_reference(Some(&full)), Some(GenreId(5)));
        assert_eq!(
            mapper.to_genre(Some(GenreId(5))),
            Some(GenreRef::Reference { id: GenreId(5) })
        );
    }

    #[test]
    fn absent_genre_maps_to_absent_reference() {
        let mapper = GenreReferenceMapper;
        assert_eq!(mapper.to_reference(None), None);
        assert_eq!(mapper.to_genre(None), None);
    }

    #[test]
    fn genre_form_round_trip() {
        let genre = Genre {
            id: Some(GenreId(1)),
            name: "Sci-fi".to_string(),
            position: Some(3),
        };
        let form = GenreMapper.to_form(&genre);
        assert_eq!(form.name.as_deref(), Some("Sci-fi"));
        assert_eq!(GenreMapper.to_entity(&form), Ok(genre));
    }

    #[test]
    fn genre_without_name_cannot_be_mapped_back() {
        let form = GenreForm {
            id: None,
            name: None,
            position: None,
        };
        assert_eq!(
            GenreMapper.to_entity(&form),
            Err(MappingError::MissingField { field: "name" })
        );
    }
}
