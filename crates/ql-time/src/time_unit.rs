//! `TimeUnit`: units of time used in `Period`.

/// A unit of time.
///
/// Only the calendar units (days to years) take part in date arithmetic;
/// the sub-day units exist for display and period algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years (12 months).
    Years,
    /// Hours.
    Hours,
    /// Minutes.
    Minutes,
    /// Seconds.
    Seconds,
    /// Milliseconds.
    Milliseconds,
    /// Microseconds.
    Microseconds,
}

impl TimeUnit {
    /// `true` for days, weeks, months and years.
    pub fn is_calendar_unit(&self) -> bool {
        matches!(
            self,
            TimeUnit::Days | TimeUnit::Weeks | TimeUnit::Months | TimeUnit::Years
        )
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Days => write!(f, "Days"),
            TimeUnit::Weeks => write!(f, "Weeks"),
            TimeUnit::Months => write!(f, "Months"),
            TimeUnit::Years => write!(f, "Years"),
            TimeUnit::Hours => write!(f, "Hours"),
            TimeUnit::Minutes => write!(f, "Minutes"),
            TimeUnit::Seconds => write!(f, "Seconds"),
            TimeUnit::Milliseconds => write!(f, "Milliseconds"),
            TimeUnit::Microseconds => write!(f, "Microseconds"),
        }
    }
}
