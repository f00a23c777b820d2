use catalog_model::forms::{BookForm, MovieForm, SeasonForm, ShowForm};

/// Forms that carry the "has IMDB identifier" checkbox and its code.
pub trait ImdbSelection {
    fn imdb(&self) -> bool;
    fn imdb_code(&self) -> Option<&str>;
}

/// Forms offering a fixed pair of language checkboxes.
pub trait LanguageSelection {
    fn czech(&self) -> bool;
    fn english(&self) -> bool;
}

/// Forms spanning a start and end year.
pub trait YearSpan {
    fn start_year(&self) -> Option<&str>;
    fn end_year(&self) -> Option<&str>;
}

impl ImdbSelection for MovieForm {
    fn imdb(&self) -> bool {
        self.imdb
    }

    fn imdb_code(&self) -> Option<&str> {
        self.imdb_code.as_deref()
    }
}

impl ImdbSelection for ShowForm {
    fn imdb(&self) -> bool {
        self.imdb
    }

    fn imdb_code(&self) -> Option<&str> {
        self.imdb_code.as_deref()
    }
}

impl LanguageSelection for BookForm {
    fn czech(&self) -> bool {
        self.czech
    }

    fn english(&self) -> bool {
        self.english
    }
}

impl YearSpan for SeasonForm {
    fn start_year(&self) -> Option<&str> {
        self.start_year.as_deref()
    }

    fn end_year(&self) -> Option<&str> {
        self.end_year.as_deref()
    }
}
