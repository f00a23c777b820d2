#![allow(dead_code)]

use catalog_core::{ValidationBounds, ValidatorRegistry};
use catalog_model::prelude::*;

pub const THIS_YEAR: i32 = 2025;

pub fn registry() -> ValidatorRegistry {
    ValidatorRegistry::new(ValidationBounds::new(1930, THIS_YEAR, 9_999_999))
}

pub fn medium(number: u32, seconds: u32) -> Medium {
    Medium {
        id: None,
        number,
        length: Length::new(seconds),
    }
}

pub fn movie(imdb_code: i32, media: Vec<Medium>) -> Movie {
    Movie {
        id: None,
        czech_name: "Samotáři".to_string(),
        original_name: "Samotáři".to_string(),
        year: 2000,
        language: Language::Cz,
        subtitles: vec![Language::En],
        media,
        csfd: None,
        imdb_code,
        wiki_en: None,
        wiki_cz: None,
        picture: None,
        note: None,
        position: Some(0),
        genres: vec![GenreRef::Full {
            id: GenreId(3),
            name: "Drama".to_string(),
        }],
    }
}

pub fn movie_form(media: Vec<DurationForm>) -> MovieForm {
    MovieForm {
        czech_name: Some("Samotáři".to_string()),
        original_name: Some("Samotáři".to_string()),
        year: Some("2000".to_string()),
        language: Some(Language::Cz),
        media,
        genres: vec![GenreId(3)],
        ..MovieForm::default()
    }
}
