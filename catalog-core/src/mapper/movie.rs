use catalog_contracts::mapper::FormMapper;
use catalog_model::forms::MovieForm;
use catalog_model::movie::{Medium, Movie};
use catalog_model::numbers::NO_IMDB_CODE;

use crate::error::{MappingError, Result};
use crate::mapper::duration::DurationMapper;
use crate::mapper::genre::GenreReferenceMapper;
use crate::mapper::imdb;
use crate::mapper::parse::{required, required_number};

/// Maps movies, including their media and genre references.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieMapper {
    durations: DurationMapper,
    genres: GenreReferenceMapper,
}

impl MovieMapper {
    pub fn new(
        durations: DurationMapper,
        genres: GenreReferenceMapper,
    ) -> Self {
        Self { durations, genres }
    }

    /// Field-by-field copy; the IMDB code and medium numbers are left as
    /// placeholders for [`MovieMapper::derive_fields`].
    pub fn structural_copy(&self, form: &MovieForm) -> Result<Movie> {
        let media = form
            .media
            .iter()
            .map(|length| {
                Ok(Medium {
                    id: None,
                    number: 0,
                    length: self.durations.to_seconds(length)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Movie {
            id: form.id,
            czech_name: required(&form.czech_name, "czechName")?,
            original_name: required(&form.original_name, "originalName")?,
            year: required_number(&form.year, "year")?,
            language: required(&form.language, "language")?,
            subtitles: form.subtitles.clone(),
            media,
            csfd: form.csfd.clone(),
            imdb_code: NO_IMDB_CODE,
            wiki_en: form.wiki_en.clone(),
            wiki_cz: form.wiki_cz.clone(),
            picture: form.picture,
            note: form.note.clone(),
            position: form.position,
            genres: self.genres.to_genres(&form.genres),
        })
    }

    /// Fill in what the form does not carry verbatim: the raw IMDB code and
    /// the contiguous medium numbering.
    pub fn derive_fields(
        &self,
        form: &MovieForm,
        movie: &mut Movie,
    ) -> Result<()> {
        movie.imdb_code = imdb::to_raw(form)?;
        movie.renumber_media();
        Ok(())
    }
}

impl FormMapper for MovieMapper {
    type Entity = Movie;
    type Form = MovieForm;
    type Error = MappingError;

    fn to_form(&self, movie: &Movie) -> MovieForm {
        let imdb = imdb::to_fields(movie.imdb_code);

        MovieForm {
            id: movie.id,
            czech_name: Some(movie.czech_name.clone()),
            original_name: Some(movie.original_name.clone()),
            year: Some(movie.year.to_string()),
            language: Some(movie.language),
            subtitles: movie.subtitles.clone(),
            media: movie
                .media
                .iter()
                .map(|medium| self.durations.to_form(&medium.length))
                .collect(),
            csfd: movie.csfd.clone(),
            imdb: imdb.imdb,
            imdb_code: imdb.imdb_code,
            wiki_en: movie.wiki_en.clone(),
            wiki_cz: movie.wiki_cz.clone(),
            picture: movie.picture,
            note: movie.note.clone(),
            position: movie.position,
            genres: self.genres.to_references(&movie.genres),
        }
    }

    fn to_entity(&self, form: &MovieForm) -> Result<Movie> {
        let mut movie = self.structural_copy(form)?;
        self.derive_fields(form, &mut movie)?;
        Ok(movie)
    }
}
