//! The checkbox-plus-code representation of a title's raw IMDB integer.

use catalog_contracts::form_like::ImdbSelection;
use catalog_model::numbers::NO_IMDB_CODE;

use crate::error::Result;
use crate::mapper::parse::parse_number;

/// Form fields derived from a stored IMDB code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImdbFields {
    pub imdb: bool,
    pub imdb_code: Option<String>,
}

/// Any value below 1 reads as "no identifier".
pub(crate) fn to_fields(raw: i32) -> ImdbFields {
    if raw < 1 {
        ImdbFields {
            imdb: false,
            imdb_code: None,
        }
    } else {
        ImdbFields {
            imdb: true,
            imdb_code: Some(raw.to_string()),
        }
    }
}

/// An unchecked box always stores [`NO_IMDB_CODE`], whatever code was typed.
pub(crate) fn to_raw(form: &impl ImdbSelection) -> Result<i32> {
    if form.imdb() {
        parse_number(form.imdb_code(), "imdbCode")
    } else {
        Ok(NO_IMDB_CODE)
    }
}
