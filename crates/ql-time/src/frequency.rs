//! `Frequency`: how often events recur.

use ql_core::errors::Error;

/// Event / payment frequency.
///
/// The discriminant is the number of events per year where that makes
/// sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// Null frequency.
    NoFrequency = -1,
    /// Only once, e.g. a zero-coupon.
    Once = 0,
    /// Once a year.
    Annual = 1,
    /// Twice a year.
    Semiannual = 2,
    /// Every fourth month.
    EveryFourthMonth = 3,
    /// Every third month.
    Quarterly = 4,
    /// Every second month.
    Bimonthly = 6,
    /// Once a month.
    Monthly = 12,
    /// Every fourth week.
    EveryFourthWeek = 13,
    /// Every second week.
    Biweekly = 26,
    /// Once a week.
    Weekly = 52,
    /// Once a day.
    Daily = 365,
    /// Some other unknown frequency.
    OtherFrequency = 999,
}

impl Frequency {
    /// Number of events per year as an integer (−1 for `NoFrequency`,
    /// 999 for `OtherFrequency`).
    pub fn as_integer(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for Frequency {
    type Error = Error;

    fn try_from(n: i32) -> Result<Self, Error> {
        let f = match n {
            -1 => Frequency::NoFrequency,
            0 => Frequency::Once,
            1 => Frequency::Annual,
            2 => Frequency::Semiannual,
            3 => Frequency::EveryFourthMonth,
            4 => Frequency::Quarterly,
            6 => Frequency::Bimonthly,
            12 => Frequency::Monthly,
            13 => Frequency::EveryFourthWeek,
            26 => Frequency::Biweekly,
            52 => Frequency::Weekly,
            365 => Frequency::Daily,
            999 => Frequency::OtherFrequency,
            _ => {
                return Err(Error::UnsupportedConvention(format!(
                    "unknown frequency ({n})"
                )))
            }
        };
        Ok(f)
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::NoFrequency => "No-Frequency",
            Frequency::Once => "Once",
            Frequency::Annual => "Annual",
            Frequency::Semiannual => "Semiannual",
            Frequency::EveryFourthMonth => "Every-Fourth-Month",
            Frequency::Quarterly => "Quarterly",
            Frequency::Bimonthly => "Bimonthly",
            Frequency::Monthly => "Monthly",
            Frequency::EveryFourthWeek => "Every-fourth-week",
            Frequency::Biweekly => "Biweekly",
            Frequency::Weekly => "Weekly",
            Frequency::Daily => "Daily",
            Frequency::OtherFrequency => "Unknown frequency",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Frequency::NoFrequency.to_string(), "No-Frequency");
        assert_eq!(Frequency::EveryFourthMonth.to_string(), "Every-Fourth-Month");
        assert_eq!(Frequency::EveryFourthWeek.to_string(), "Every-fourth-week");
        assert_eq!(Frequency::OtherFrequency.to_string(), "Unknown frequency");
    }

    #[test]
    fn integer_codes() {
        assert_eq!(Frequency::try_from(4), Ok(Frequency::Quarterly));
        assert_eq!(Frequency::Biweekly.as_integer(), 26);
        assert!(matches!(
            Frequency::try_from(5),
            Err(Error::UnsupportedConvention(_))
        ));
    }
}
