//! `Period`: a time span expressed in a [`TimeUnit`].
//!
//! Periods support a limited algebra: years combine with months, weeks
//! combine with days, and anything else is an
//! [`Error::ImpossiblePeriodOperation`].  Ordering is only partial, since a
//! month may be anywhere between 28 and 31 days long; comparisons that cannot
//! be decided return `None` from [`PartialOrd`] and
//! [`Error::UndecidableComparison`] from [`Period::try_cmp`].

use std::cmp::Ordering;
use std::fmt;

use crate::frequency::Frequency;
use crate::time_unit::TimeUnit;
use ql_core::errors::{Error, Result};
use ql_core::{ensure, Integer, Real};

/// A time span made up of an integer length and a [`TimeUnit`].
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Number of units.
    pub length: Integer,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Default for Period {
    /// Zero days.
    fn default() -> Self {
        Period::new(0, TimeUnit::Days)
    }
}

impl Period {
    /// Create a new period.
    pub fn new(length: Integer, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Number of units.
    pub fn length(&self) -> Integer {
        self.length
    }

    /// The unit of time.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Construct the period between two events of the given [`Frequency`].
    ///
    /// # Errors
    /// [`Error::UnsupportedConvention`] for `OtherFrequency`.
    pub fn from_frequency(freq: Frequency) -> Result<Self> {
        let f = freq.as_integer();
        let p = match freq {
            Frequency::NoFrequency => Period::new(0, TimeUnit::Days),
            Frequency::Once => Period::new(0, TimeUnit::Years),
            Frequency::Annual => Period::new(1, TimeUnit::Years),
            Frequency::Semiannual
            | Frequency::EveryFourthMonth
            | Frequency::Quarterly
            | Frequency::Bimonthly
            | Frequency::Monthly => Period::new(12 / f, TimeUnit::Months),
            Frequency::EveryFourthWeek | Frequency::Biweekly | Frequency::Weekly => {
                Period::new(52 / f, TimeUnit::Weeks)
            }
            Frequency::Daily => Period::new(1, TimeUnit::Days),
            Frequency::OtherFrequency => {
                return Err(Error::UnsupportedConvention(format!(
                    "unknown frequency ({freq})"
                )))
            }
        };
        Ok(p)
    }

    /// The frequency matching this period, or `OtherFrequency` when none
    /// does.
    ///
    /// # Errors
    /// [`Error::UnsupportedConvention`] for sub-day units.
    pub fn frequency(&self) -> Result<Frequency> {
        let length = self.length.abs();
        if length == 0 {
            return Ok(if self.unit == TimeUnit::Years {
                Frequency::Once
            } else {
                Frequency::NoFrequency
            });
        }
        let f = match self.unit {
            TimeUnit::Years if length == 1 => Frequency::Annual,
            TimeUnit::Months if length <= 12 && 12 % length == 0 => {
                Frequency::try_from(12 / length)?
            }
            TimeUnit::Weeks if length == 1 => Frequency::Weekly,
            TimeUnit::Weeks if length == 2 => Frequency::Biweekly,
            TimeUnit::Weeks if length == 4 => Frequency::EveryFourthWeek,
            TimeUnit::Days if length == 1 => Frequency::Daily,
            TimeUnit::Days | TimeUnit::Weeks | TimeUnit::Months | TimeUnit::Years => {
                Frequency::OtherFrequency
            }
            unit => {
                return Err(Error::UnsupportedConvention(format!(
                    "unsupported time unit ({unit})"
                )))
            }
        };
        Ok(f)
    }

    /// Negate the period (reverse direction).
    pub fn negated(self) -> Self {
        Self {
            length: -self.length,
            unit: self.unit,
        }
    }

    /// Rewrite a whole number of years expressed in months as years.
    pub fn normalized(self) -> Self {
        if self.length != 0 && self.unit == TimeUnit::Months && self.length % 12 == 0 {
            Period::new(self.length / 12, TimeUnit::Years)
        } else {
            self
        }
    }

    // ── Unit conversions ──────────────────────────────────────────────────────

    /// Length in years.
    pub fn years(&self) -> Result<Real> {
        match self.unit {
            _ if self.length == 0 => Ok(0.0),
            TimeUnit::Months => Ok(self.length as Real / 12.0),
            TimeUnit::Years => Ok(self.length as Real),
            unit => Err(self.conversion_error(unit, TimeUnit::Years)),
        }
    }

    /// Length in months.
    pub fn months(&self) -> Result<Real> {
        match self.unit {
            _ if self.length == 0 => Ok(0.0),
            TimeUnit::Months => Ok(self.length as Real),
            TimeUnit::Years => Ok(self.length as Real * 12.0),
            unit => Err(self.conversion_error(unit, TimeUnit::Months)),
        }
    }

    /// Length in weeks.
    pub fn weeks(&self) -> Result<Real> {
        match self.unit {
            _ if self.length == 0 => Ok(0.0),
            TimeUnit::Days => Ok(self.length as Real / 7.0),
            TimeUnit::Weeks => Ok(self.length as Real),
            unit => Err(self.conversion_error(unit, TimeUnit::Weeks)),
        }
    }

    /// Length in days.
    pub fn days(&self) -> Result<Real> {
        match self.unit {
            _ if self.length == 0 => Ok(0.0),
            TimeUnit::Days => Ok(self.length as Real),
            TimeUnit::Weeks => Ok(self.length as Real * 7.0),
            unit => Err(self.conversion_error(unit, TimeUnit::Days)),
        }
    }

    fn conversion_error(&self, from: TimeUnit, to: TimeUnit) -> Error {
        Error::ImpossiblePeriodOperation(format!("cannot convert {from} into {to}"))
    }

    // ── Algebra ───────────────────────────────────────────────────────────────

    /// Sum of two periods.
    ///
    /// # Errors
    /// [`Error::ImpossiblePeriodOperation`] unless the units are equal, are
    /// years and months, or are weeks and days (a zero-length operand is
    /// always accepted).
    pub fn try_add(self, other: Period) -> Result<Period> {
        use TimeUnit::*;
        if self.length == 0 {
            return Ok(other);
        }
        if self.unit == other.unit {
            return Ok(Period::new(self.length + other.length, self.unit));
        }
        match (self.unit, other.unit) {
            (Years, Months) => Ok(Period::new(self.length * 12 + other.length, Months)),
            (Months, Years) => Ok(Period::new(self.length + other.length * 12, Months)),
            (Weeks, Days) => Ok(Period::new(self.length * 7 + other.length, Days)),
            (Days, Weeks) => Ok(Period::new(self.length + other.length * 7, Days)),
            _ if other.length == 0 => Ok(self),
            _ => Err(Error::ImpossiblePeriodOperation(format!(
                "impossible addition between {self} and {other}"
            ))),
        }
    }

    /// Difference of two periods, `self + (-other)`.
    pub fn try_sub(self, other: Period) -> Result<Period> {
        self.try_add(-other)
    }

    /// Divide the period by `n`, moving to a finer unit when needed
    /// (years → months, weeks → days).
    ///
    /// # Errors
    /// [`Error::Precondition`] if `n` is zero or the length cannot be divided
    /// evenly.
    pub fn try_div(self, n: Integer) -> Result<Period> {
        ensure!(n != 0, "cannot divide {self} by zero");
        if self.length % n == 0 {
            return Ok(Period::new(self.length / n, self.unit));
        }
        let (length, unit) = match self.unit {
            TimeUnit::Years => (self.length * 12, TimeUnit::Months),
            TimeUnit::Weeks => (self.length * 7, TimeUnit::Days),
            unit => (self.length, unit),
        };
        ensure!(length % n == 0, "{self} cannot be divided by {n}");
        Ok(Period::new(length / n, unit))
    }

    // ── Comparison ────────────────────────────────────────────────────────────

    /// Compare two periods.
    ///
    /// # Errors
    /// [`Error::UndecidableComparison`] when the day ranges of the two
    /// periods overlap (e.g. one month against thirty days).
    pub fn try_cmp(&self, other: &Period) -> Result<Ordering> {
        if self.less_than(other)? {
            Ok(Ordering::Less)
        } else if other.less_than(self)? {
            Ok(Ordering::Greater)
        } else {
            Ok(Ordering::Equal)
        }
    }

    fn less_than(&self, other: &Period) -> Result<bool> {
        use TimeUnit::*;
        let (l1, l2) = (i64::from(self.length), i64::from(other.length));
        if l1 == 0 {
            return Ok(l2 > 0);
        }
        if l2 == 0 {
            return Ok(l1 < 0);
        }
        match (self.unit, other.unit) {
            (u1, u2) if u1 == u2 => return Ok(l1 < l2),
            (Months, Years) => return Ok(l1 < 12 * l2),
            (Years, Months) => return Ok(12 * l1 < l2),
            (Days, Weeks) => return Ok(l1 < 7 * l2),
            (Weeks, Days) => return Ok(7 * l1 < l2),
            _ => {}
        }
        let undecidable =
            || Error::UndecidableComparison(format!("cannot compare {self} and {other}"));
        let (min1, max1) = self.day_range().ok_or_else(undecidable)?;
        let (min2, max2) = other.day_range().ok_or_else(undecidable)?;
        if max1 < min2 {
            Ok(true)
        } else if min1 > max2 {
            Ok(false)
        } else {
            Err(undecidable())
        }
    }

    /// Shortest and longest number of days the period can span.
    fn day_range(&self) -> Option<(i64, i64)> {
        let n = i64::from(self.length);
        match self.unit {
            TimeUnit::Days => Some((n, n)),
            TimeUnit::Weeks => Some((7 * n, 7 * n)),
            TimeUnit::Months => Some((28 * n, 31 * n)),
            TimeUnit::Years => Some((365 * n, 366 * n)),
            _ => None,
        }
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Spelled-out form, e.g. `"1 year 3 months"` or `"2 weeks 1 day"`.
    pub fn long_string(&self) -> String {
        fn plural(n: Integer, singular: &str) -> String {
            if n == 1 {
                format!("{n} {singular}")
            } else {
                format!("{n} {singular}s")
            }
        }
        let n = self.length;
        match self.unit {
            TimeUnit::Days if n >= 7 => {
                let head = plural(n / 7, "week");
                match n % 7 {
                    0 => head,
                    rest => format!("{head} {}", plural(rest, "day")),
                }
            }
            TimeUnit::Months if n >= 12 => {
                let head = plural(n / 12, "year");
                match n % 12 {
                    0 => head,
                    rest => format!("{head} {}", plural(rest, "month")),
                }
            }
            TimeUnit::Days => plural(n, "day"),
            TimeUnit::Weeks => plural(n, "week"),
            TimeUnit::Months => plural(n, "month"),
            TimeUnit::Years => plural(n, "year"),
            TimeUnit::Hours => plural(n, "hour"),
            TimeUnit::Minutes => plural(n, "minute"),
            TimeUnit::Seconds => plural(n, "second"),
            TimeUnit::Milliseconds => plural(n, "millisecond"),
            TimeUnit::Microseconds => plural(n, "microsecond"),
        }
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::ops::Mul<Integer> for Period {
    type Output = Self;
    fn mul(self, rhs: Integer) -> Self {
        Period::new(self.length * rhs, self.unit)
    }
}

impl std::ops::Mul<Period> for Integer {
    type Output = Period;
    fn mul(self, rhs: Period) -> Period {
        rhs * self
    }
}

impl std::ops::Mul<TimeUnit> for Integer {
    type Output = Period;
    fn mul(self, rhs: TimeUnit) -> Period {
        Period::new(self, rhs)
    }
}

impl PartialEq for Period {
    /// Semantic equality: `1Y == 12M`.  Undecidable pairs are unequal.
    fn eq(&self, other: &Self) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.length;
        match self.unit {
            TimeUnit::Days if n >= 7 => {
                write!(f, "{}W", n / 7)?;
                match n % 7 {
                    0 => Ok(()),
                    rest => write!(f, "{rest}D"),
                }
            }
            TimeUnit::Months if n >= 12 => {
                write!(f, "{}Y", n / 12)?;
                match n % 12 {
                    0 => Ok(()),
                    rest => write!(f, "{rest}M"),
                }
            }
            TimeUnit::Days => write!(f, "{n}D"),
            TimeUnit::Weeks => write!(f, "{n}W"),
            TimeUnit::Months => write!(f, "{n}M"),
            TimeUnit::Years => write!(f, "{n}Y"),
            TimeUnit::Hours => write!(f, "{n}h"),
            TimeUnit::Minutes => write!(f, "{n}m"),
            TimeUnit::Seconds => write!(f, "{n}s"),
            TimeUnit::Milliseconds => write!(f, "{n}ms"),
            TimeUnit::Microseconds => write!(f, "{n}us"),
        }
    }
}

impl fmt::Debug for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Period({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Period::new(3, TimeUnit::Months).to_string(), "3M");
        assert_eq!(Period::new(1, TimeUnit::Years).to_string(), "1Y");
        assert_eq!(Period::new(-6, TimeUnit::Months).to_string(), "-6M");
        assert_eq!(Period::new(9, TimeUnit::Days).to_string(), "1W2D");
        assert_eq!(Period::new(14, TimeUnit::Days).to_string(), "2W");
        assert_eq!(Period::new(15, TimeUnit::Months).to_string(), "1Y3M");
        assert_eq!(Period::new(250, TimeUnit::Milliseconds).to_string(), "250ms");
    }

    #[test]
    fn long_display() {
        assert_eq!(Period::new(1, TimeUnit::Years).long_string(), "1 year");
        assert_eq!(Period::new(2, TimeUnit::Months).long_string(), "2 months");
        assert_eq!(Period::new(17, TimeUnit::Days).long_string(), "2 weeks 3 days");
        assert_eq!(Period::new(13, TimeUnit::Months).long_string(), "1 year 1 month");
        assert_eq!(Period::new(24, TimeUnit::Months).long_string(), "2 years");
    }

    #[test]
    fn from_frequency() {
        let cases = [
            (Frequency::NoFrequency, Period::new(0, TimeUnit::Days)),
            (Frequency::Once, Period::new(0, TimeUnit::Years)),
            (Frequency::Annual, Period::new(1, TimeUnit::Years)),
            (Frequency::Semiannual, Period::new(6, TimeUnit::Months)),
            (Frequency::EveryFourthMonth, Period::new(4, TimeUnit::Months)),
            (Frequency::Quarterly, Period::new(3, TimeUnit::Months)),
            (Frequency::Bimonthly, Period::new(2, TimeUnit::Months)),
            (Frequency::Monthly, Period::new(1, TimeUnit::Months)),
            (Frequency::EveryFourthWeek, Period::new(4, TimeUnit::Weeks)),
            (Frequency::Biweekly, Period::new(2, TimeUnit::Weeks)),
            (Frequency::Weekly, Period::new(1, TimeUnit::Weeks)),
            (Frequency::Daily, Period::new(1, TimeUnit::Days)),
        ];
        for (freq, expected) in cases {
            let p = Period::from_frequency(freq).unwrap();
            assert_eq!(p.length, expected.length, "{freq}");
            assert_eq!(p.unit, expected.unit, "{freq}");
        }
        assert!(matches!(
            Period::from_frequency(Frequency::OtherFrequency),
            Err(Error::UnsupportedConvention(_))
        ));
    }

    #[test]
    fn frequency_inverse() {
        let freqs = [
            Frequency::Annual,
            Frequency::Semiannual,
            Frequency::EveryFourthMonth,
            Frequency::Quarterly,
            Frequency::Bimonthly,
            Frequency::Monthly,
            Frequency::EveryFourthWeek,
            Frequency::Biweekly,
            Frequency::Weekly,
            Frequency::Daily,
        ];
        for f in freqs {
            assert_eq!(Period::from_frequency(f).unwrap().frequency().unwrap(), f);
        }
        assert_eq!(
            Period::new(5, TimeUnit::Months).frequency().unwrap(),
            Frequency::OtherFrequency
        );
        assert_eq!(
            Period::new(0, TimeUnit::Years).frequency().unwrap(),
            Frequency::Once
        );
        assert!(Period::new(3, TimeUnit::Seconds).frequency().is_err());
    }

    #[test]
    fn conversions() {
        assert_eq!(Period::new(18, TimeUnit::Months).years().unwrap(), 1.5);
        assert_eq!(Period::new(2, TimeUnit::Years).months().unwrap(), 24.0);
        assert_eq!(Period::new(14, TimeUnit::Days).weeks().unwrap(), 2.0);
        assert_eq!(Period::new(3, TimeUnit::Weeks).days().unwrap(), 21.0);
        assert_eq!(Period::new(0, TimeUnit::Days).years().unwrap(), 0.0);
        assert!(matches!(
            Period::new(10, TimeUnit::Days).years(),
            Err(Error::ImpossiblePeriodOperation(_))
        ));
        assert!(Period::new(1, TimeUnit::Months).days().is_err());
    }

    #[test]
    fn semantic_equality() {
        assert_eq!(Period::new(1, TimeUnit::Years), Period::new(12, TimeUnit::Months));
        assert_eq!(Period::new(2, TimeUnit::Weeks), Period::new(14, TimeUnit::Days));
        assert_eq!(Period::new(0, TimeUnit::Days), Period::new(0, TimeUnit::Years));
        assert_ne!(Period::new(1, TimeUnit::Months), Period::new(30, TimeUnit::Days));
    }

    #[test]
    fn unit_multiplication() {
        let p = 3 * TimeUnit::Months;
        assert_eq!(p.length, 3);
        assert_eq!(p.unit, TimeUnit::Months);
        assert_eq!((2 * p).length, 6);
    }
}
