/// A length split into separately edited hours, minutes and seconds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DurationForm {
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

impl DurationForm {
    pub fn new(
        hours: impl Into<String>,
        minutes: impl Into<String>,
        seconds: impl Into<String>,
    ) -> Self {
        Self {
            hours: Some(hours.into()),
            minutes: Some(minutes.into()),
            seconds: Some(seconds.into()),
        }
    }

    /// `true` when any of the three parts is absent or blank.
    pub fn is_partially_blank(&self) -> bool {
        [&self.hours, &self.minutes, &self.seconds]
            .into_iter()
            .any(|part| part.as_deref().is_none_or(|s| s.trim().is_empty()))
    }
}
