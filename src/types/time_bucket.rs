use std::fmt;
use std::fmt::{Display, Formatter};

/// Coarse time-of-day bucket for a sale.
///
/// The boundaries are fixed: Morning covers 05:00-11:59, Afternoon covers
/// 12:00-16:59, and Night covers everything else (17:00-04:59). Every hour
/// of the day maps to exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Night
}

impl TimeBucket {
    /// Maps an hour of the day (0-23) to its bucket.
    /// Returns `None` for out-of-range hours.
    pub fn from_hour(hour: u8) -> Option<Self> {
        match hour {
            5..=11 => Some(Self::Morning),
            12..=16 => Some(Self::Afternoon),
            0..=4 | 17..=23 => Some(Self::Night),
            _ => None
        }
    }
}

impl Display for TimeBucket {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Night => "Night"
        };

        write!(formatter, "{label}")
    }
}
