use catalog_contracts::mapper::FormMapper;
use catalog_model::forms::{MusicForm, SongForm};
use catalog_model::music::{Music, Song};

use crate::error::{MappingError, Result};
use crate::mapper::duration::DurationMapper;
use crate::mapper::parse::{required, required_number};

#[derive(Debug, Clone, Copy, Default)]
pub struct MusicMapper;

impl FormMapper for MusicMapper {
    type Entity = Music;
    type Form = MusicForm;
    type Error = MappingError;

    fn to_form(&self, music: &Music) -> MusicForm {
        MusicForm {
            id: music.id,
            name: Some(music.name.clone()),
            wiki_en: music.wiki_en.clone(),
            wiki_cz: music.wiki_cz.clone(),
            media_count: Some(music.media_count.to_string()),
            note: music.note.clone(),
            position: music.position,
        }
    }

    fn to_entity(&self, form: &MusicForm) -> Result<Music> {
        Ok(Music {
            id: form.id,
            name: required(&form.name, "name")?,
            wiki_en: form.wiki_en.clone(),
            wiki_cz: form.wiki_cz.clone(),
            media_count: required_number(&form.media_count, "mediaCount")?,
            note: form.note.clone(),
            position: form.position,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SongMapper {
    durations: DurationMapper,
}

impl SongMapper {
    pub fn new(durations: DurationMapper) -> Self {
        Self { durations }
    }
}

impl FormMapper for SongMapper {
    type Entity = Song;
    type Form = SongForm;
    type Error = MappingError;

    fn to_form(&self, song: &Song) -> SongForm {
        SongForm {
            id: song.id,
            name: Some(song.name.clone()),
            length: Some(self.durations.to_form(&song.length)),
            note: song.note.clone(),
            position: song.position,
        }
    }

    fn to_entity(&self, form: &SongForm) -> Result<Song> {
        let length = self
            .durations
            .to_entity_opt(form.length.as_ref())?
            .ok_or(MappingError::MissingField { field: "length" })?;

        Ok(Song {
            id: form.id,
            name: required(&form.name, "name")?,
            length,
            note: form.note.clone(),
            position: form.position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::forms::DurationForm;
    use catalog_model::ids::{MusicId, SongId};
    use catalog_model::numbers::Length;

    #[test]
    fn music_media_count_round_trips_as_text() {
        let music = Music {
            id: Some(MusicId(1)),
            name: "Album".to_string(),
            wiki_en: Some("enWiki".to_string()),
            wiki_cz: None,
            media_count: 2,
            note: None,
            position: Some(1),
        };

        let form = MusicMapper.to_form(&music);
        assert_eq!(form.media_count.as_deref(), Some("2"));
        assert_eq!(MusicMapper.to_entity(&form), Ok(music));
    }

    #[test]
    fn music_with_malformed_count_fails() {
        let form = MusicForm {
            name: Some("Album".to_string()),
            media_count: Some("two".to_string()),
            ..MusicForm::default()
        };
        assert_eq!(
            MusicMapper.to_entity(&form),
            Err(MappingError::InvalidNumber {
                field: "mediaCount",
                value: "two".to_string()
            })
        );
    }

    #[test]
    fn song_length_is_split_and_recombined() {
        let song = Song {
            id: Some(SongId(3)),
            name: "Track".to_string(),
            length: Length::new(245),
            note: None,
            position: None,
        };

        let form = SongMapper::default().to_form(&song);
        assert_eq!(form.length, Some(DurationForm::new("0", "4", "5")));
        assert_eq!(SongMapper::default().to_entity(&form), Ok(song));
    }
}
