//! Request-scoped, string-typed representations of entities for editing.
//!
//! Numeric fields stay as the text the user typed so validation can report
//! on them before anything is parsed.

pub mod book;
pub mod duration;
pub mod genre;
pub mod movie;
pub mod music;
pub mod show;
pub mod software;

pub use book::BookForm;
pub use duration::DurationForm;
pub use genre::GenreForm;
pub use movie::MovieForm;
pub use music::{MusicForm, SongForm};
pub use show::{EpisodeForm, SeasonForm, ShowForm};
pub use software::{GameForm, ProgramForm};

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::ids::GenreId;
    use crate::language::Language;

    #[test]
    fn movie_form_binds_camel_case_and_fills_defaults() {
        let form: MovieForm = serde_json::from_value(serde_json::json!({
            "czechName": "Samotáři",
            "language": "CZ",
            "imdbCode": "0250440",
            "media": [{ "hours": "1", "minutes": "43", "seconds": "0" }],
            "genres": [4, 2]
        }))
        .unwrap();

        assert_eq!(form.czech_name.as_deref(), Some("Samotáři"));
        assert_eq!(form.language, Some(Language::Cz));
        assert!(!form.imdb, "missing checkbox binds as unchecked");
        assert_eq!(form.imdb_code.as_deref(), Some("0250440"));
        assert_eq!(form.media, vec![DurationForm::new("1", "43", "0")]);
        assert_eq!(form.genres, vec![GenreId(4), GenreId(2)]);
        assert!(form.original_name.is_none());
        assert!(form.subtitles.is_empty());
    }

    #[test]
    fn partially_filled_duration_binds_missing_parts_as_none() {
        let form: DurationForm =
            serde_json::from_str(r#"{ "minutes": "5" }"#).unwrap();
        assert_eq!(form.hours, None);
        assert_eq!(form.minutes.as_deref(), Some("5"));
        assert!(form.is_partially_blank());
    }
}
