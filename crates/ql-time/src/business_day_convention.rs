//! Business-day convention.

use ql_core::errors::Error;

/// How to adjust a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding,
    /// Do not adjust.
    Unadjusted,
    /// Choose the first business day after the given holiday unless that day
    /// crosses the mid-month (15th) or the end of month, in which case choose
    /// the first business day before the holiday.
    HalfMonthModifiedFollowing,
    /// Choose the nearest business day.  In case of a tie, the following
    /// business day wins.
    Nearest,
    /// Placeholder for an unrecognised convention; every adjustment with it
    /// fails.
    Unknown,
}

impl TryFrom<i32> for BusinessDayConvention {
    type Error = Error;

    /// Decode the conventional integer code (0 = `Following` … 6 =
    /// `Nearest`).
    fn try_from(code: i32) -> Result<Self, Error> {
        use BusinessDayConvention::*;
        match code {
            0 => Ok(Following),
            1 => Ok(ModifiedFollowing),
            2 => Ok(Preceding),
            3 => Ok(ModifiedPreceding),
            4 => Ok(Unadjusted),
            5 => Ok(HalfMonthModifiedFollowing),
            6 => Ok(Nearest),
            _ => Err(Error::UnsupportedConvention(format!(
                "unknown business-day convention ({code})"
            ))),
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::HalfMonthModifiedFollowing => "Half-Month Modified Following",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}
