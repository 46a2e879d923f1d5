use std::fmt;
use std::fmt::{Display, Formatter};

/// Meteorological season derived from a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn
}

impl Season {
    /// Maps a calendar month (1-12) to its season.
    /// Returns `None` for out-of-range months.
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            12 | 1 | 2 => Some(Self::Winter),
            3..=5 => Some(Self::Spring),
            6..=8 => Some(Self::Summer),
            9..=11 => Some(Self::Autumn),
            _ => None
        }
    }
}

impl Display for Season {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn"
        };

        write!(formatter, "{label}")
    }
}
