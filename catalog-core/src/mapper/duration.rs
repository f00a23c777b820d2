use catalog_contracts::mapper::FormMapper;
use catalog_model::forms::DurationForm;
use catalog_model::numbers::Length;

use crate::error::{MappingError, Result};
use crate::mapper::parse::required_number;

/// Maps a length in seconds to separate hour/minute/second fields and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationMapper;

impl DurationMapper {
    pub fn new() -> Self {
        Self
    }

    /// Recombine the three fields into a total number of seconds.
    pub fn to_seconds(&self, form: &DurationForm) -> Result<Length> {
        let hours: u32 = required_number(&form.hours, "hours")?;
        let minutes: u32 = required_number(&form.minutes, "minutes")?;
        let seconds: u32 = required_number(&form.seconds, "seconds")?;

        Length::from_parts(hours, minutes, seconds).ok_or(
            MappingError::LengthOverflow {
                hours,
                minutes,
                seconds,
            },
        )
    }
}

impl FormMapper for DurationMapper {
    type Entity = Length;
    type Form = DurationForm;
    type Error = MappingError;

    fn to_form(&self, length: &Length) -> DurationForm {
        DurationForm::new(
            length.hours_part().to_string(),
            length.minutes_part().to_string(),
            length.seconds_part().to_string(),
        )
    }

    fn to_entity(&self, form: &DurationForm) -> Result<Length> {
        self.to_seconds(form)
    }
}
