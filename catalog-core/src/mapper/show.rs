use catalog_contracts::mapper::FormMapper;
use catalog_model::forms::{EpisodeForm, SeasonForm, ShowForm};
use catalog_model::numbers::NO_IMDB_CODE;
use catalog_model::show::{Episode, Season, Show};

use crate::error::{MappingError, Result};
use crate::mapper::duration::DurationMapper;
use crate::mapper::genre::GenreReferenceMapper;
use crate::mapper::imdb;
use crate::mapper::parse::{required, required_number};

/// Maps shows. The IMDB code follows the same checkbox rules as movies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowMapper {
    genres: GenreReferenceMapper,
}

impl ShowMapper {
    pub fn new(genres: GenreReferenceMapper) -> Self {
        Self { genres }
    }

    pub fn structural_copy(&self, form: &ShowForm) -> Result<Show> {
        Ok(Show {
            id: form.id,
            czech_name: required(&form.czech_name, "czechName")?,
            original_name: required(&form.original_name, "originalName")?,
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

    pub fn derive_fields(
        &self,
        form: &ShowForm,
        show: &mut Show,
    ) -> Result<()> {
        show.imdb_code = imdb::to_raw(form)?;
        Ok(())
    }
}

impl FormMapper for ShowMapper {
    type Entity = Show;
    type Form = ShowForm;
    type Error = MappingError;

    fn to_form(&self, show: &Show) -> ShowForm {
        let imdb = imdb::to_fields(show.imdb_code);

        ShowForm {
            id: show.id,
            czech_name: Some(show.czech_name.clone()),
            original_name: Some(show.original_name.clone()),
            csfd: show.csfd.clone(),
            imdb: imdb.imdb,
            imdb_code: imdb.imdb_code,
            wiki_en: show.wiki_en.clone(),
            wiki_cz: show.wiki_cz.clone(),
            picture: show.picture,
            note: show.note.clone(),
            position: show.position,
            genres: self.genres.to_references(&show.genres),
        }
    }

    fn to_entity(&self, form: &ShowForm) -> Result<Show> {
        let mut show = self.structural_copy(form)?;
        self.derive_fields(form, &mut show)?;
        Ok(show)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonMapper;

impl FormMapper for SeasonMapper {
    type Entity = Season;
    type Form = SeasonForm;
    type Error = MappingError;

    fn to_form(&self, season: &Season) -> SeasonForm {
        SeasonForm {
            id: season.id,
            number: Some(season.number.to_string()),
            start_year: Some(season.start_year.to_string()),
            end_year: Some(season.end_year.to_string()),
            language: Some(season.language),
            subtitles: season.subtitles.clone(),
            note: season.note.clone(),
            position: season.position,
        }
    }

    fn to_entity(&self, form: &SeasonForm) -> Result<Season> {
        Ok(Season {
            id: form.id,
            number: required_number(&form.number, "number")?,
            start_year: required_number(&form.start_year, "startYear")?,
            end_year: required_number(&form.end_year, "endYear")?,
            language: required(&form.language, "language")?,
            subtitles: form.subtitles.clone(),
            note: form.note.clone(),
            position: form.position,
        })
    }
}

/// Maps episodes; the length goes through a [`DurationMapper`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EpisodeMapper {
    durations: DurationMapper,
}

impl EpisodeMapper {
    pub fn new(durations: DurationMapper) -> Self {
        Self { durations }
    }
}

impl FormMapper for EpisodeMapper {
    type Entity = Episode;
    type Form = EpisodeForm;
    type Error = MappingError;

    fn to_form(&self, episode: &Episode) -> EpisodeForm {
        EpisodeForm {
            id: episode.id,
            number: Some(episode.number.to_string()),
            name: Some(episode.name.clone()),
            length: Some(self.durations.to_form(&episode.length)),
            note: episode.note.clone(),
            position: episode.position,
        }
    }

    fn to_entity(&self, form: &EpisodeForm) -> Result<Episode> {
        let length = self
            .durations
            .to_entity_opt(form.length.as_ref())?
            .ok_or(MappingError::MissingField { field: "length" })?;

        Ok(Episode {
            id: form.id,
            number: required_number(&form.number, "number")?,
            name: required(&form.name, "name")?,
            length,
            note: form.note.clone(),
            position: form.position,
        })
    }
}
