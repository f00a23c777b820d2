//! # Catalog Core
//!
//! Turns catalog entities into editable forms and submitted forms back into
//! entities, and decides whether a submitted form is acceptable first.
//!
//! - [`mapper`]: one [`FormMapper`](catalog_contracts::mapper::FormMapper)
//!   per entity. Lengths are split into hour, minute and second fields, genres
//!   travel as ids, and the IMDB code is shown as a checkbox plus code.
//! - [`validation`]: field and cross-field constraints, registered per form
//!   kind in a [`ValidatorRegistry`].
//! - [`submit()`]: validate, then map.
//!
//! ```
//! use catalog_contracts::mapper::FormMapper;
//! use catalog_core::MovieMapper;
//! use catalog_model::{Language, Length, Medium, Movie, NO_IMDB_CODE};
//!
//! let movie = Movie {
//!     id: None,
//!     czech_name: "Pelíšky".into(),
//!     original_name: "Pelíšky".into(),
//!     year: 1999,
//!     language: Language::Cz,
//!     subtitles: vec![],
//!     media: vec![Medium { id: None, number: 9, length: Length::new(3_725) }],
//!     csfd: None,
//!     imdb_code: NO_IMDB_CODE,
//!     wiki_en: None,
//!     wiki_cz: None,
//!     picture: None,
//!     note: None,
//!     position: None,
//!     genres: vec![],
//! };
//!
//! let mapper = MovieMapper::default();
//! let form = mapper.to_form(&movie);
//! assert!(!form.imdb);
//! assert_eq!(form.media[0].hours.as_deref(), Some("1"));
//!
//! let back = mapper.to_entity(&form).unwrap();
//! assert_eq!(back.media[0].number, 1);
//! assert_eq!(back.imdb_code, NO_IMDB_CODE);
//! ```
#![allow(missing_docs)]

pub mod error;
pub mod mapper;
pub mod submit;
pub mod validation;

pub use error::{MappingError, Result, SubmitError, UnknownFormKind};
pub use mapper::{
    DurationMapper, EpisodeMapper, GameMapper, GenreMapper,
    GenreReferenceMapper, MovieMapper, MusicMapper, ProgramMapper,
    SeasonMapper, ShowMapper, SongMapper,
};
pub use submit::submit;
pub use validation::{
    ConstraintKind, FormKind, FormRef, RuleDescription, ValidationBounds,
    ValidationReport, ValidatorRegistry, Violation,
};
