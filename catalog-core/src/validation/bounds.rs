use chrono::Datelike;

/// Earliest release year the catalog accepts.
pub const MIN_YEAR: i32 = 1930;

/// Largest IMDB code that still fits the seven digit field.
pub const MAX_IMDB_CODE: i32 = 9_999_999;

/// Process-wide bounds the parameterized validators are built with.
///
/// `current_year` is captured once when the bounds are created; a registry
/// built before midnight on new year's eve keeps accepting the old year as
/// the upper bound until it is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationBounds {
    pub min_year: i32,
    pub current_year: i32,
    pub max_imdb_code: i32,
}

impl ValidationBounds {
    pub fn new(min_year: i32, current_year: i32, max_imdb_code: i32) -> Self {
        Self {
            min_year,
            current_year,
            max_imdb_code,
        }
    }

    /// Default bounds with the upper year taken from the local clock.
    pub fn current() -> Self {
        Self::new(MIN_YEAR, this_year(), MAX_IMDB_CODE)
    }

    pub fn with_current_year(mut self, current_year: i32) -> Self {
        self.current_year = current_year;
        self
    }
}

impl Default for ValidationBounds {
    fn default() -> Self {
        Self::current()
    }
}

pub fn this_year() -> i32 {
    chrono::Local::now().year()
}
