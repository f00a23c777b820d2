/// Raw IMDB code stored on a title when no external identifier is assigned.
///
/// Any value below 1 is read as "absent", but only this one is written back.
pub const NO_IMDB_CODE: i32 = -1;

/// Length of a medium, episode or song in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Length(u32);

impl Length {
    pub const SECONDS_PER_MINUTE: u32 = 60;
    pub const SECONDS_PER_HOUR: u32 = 3_600;

    pub fn new(seconds: u32) -> Self {
        Length(seconds)
    }

    /// Recombine hour/minute/second parts, `None` when the total overflows.
    pub fn from_parts(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        hours
            .checked_mul(Self::SECONDS_PER_HOUR)?
            .checked_add(minutes.checked_mul(Self::SECONDS_PER_MINUTE)?)?
            .checked_add(seconds)
            .map(Length)
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// Whole hours, no upper bound.
    pub fn hours_part(&self) -> u32 {
        self.0 / Self::SECONDS_PER_HOUR
    }

    pub fn minutes_part(&self) -> u32 {
        self.0 % Self::SECONDS_PER_HOUR / Self::SECONDS_PER_MINUTE
    }

    pub fn seconds_part(&self) -> u32 {
        self.0 % Self::SECONDS_PER_MINUTE
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}",
            self.hours_part(),
            self.minutes_part(),
            self.seconds_part()
        )
    }
}
