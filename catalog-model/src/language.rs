use std::str::FromStr;

use crate::error::ModelError;

/// Languages a title can be dubbed or subtitled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Language {
    Cz,
    En,
    Fr,
    Jap,
    Sk,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Cz,
        Language::En,
        Language::Fr,
        Language::Jap,
        Language::Sk,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Cz => "CZ",
            Language::En => "EN",
            Language::Fr => "FR",
            Language::Jap => "JAP",
            Language::Sk => "SK",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownLanguage(s.to_string()))
    }
}
