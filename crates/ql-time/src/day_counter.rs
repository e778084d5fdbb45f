//! `DayCounter` value type and the [`DayCounterImpl`] rule trait.
//!
//! A day counter computes the **day count fraction**, the fraction of a year
//! between two dates, used when discounting or accruing interest.  Concrete
//! conventions live in [`crate::day_counters`].

use std::fmt;
use std::sync::Arc;

use crate::date::Date;
use ql_core::errors::{Error, Result};
use ql_core::{BigInteger, Time};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounterImpl: fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    ///
    /// Defaults to the number of calendar days.
    fn day_count(&self, d1: &Date, d2: &Date) -> Result<BigInteger> {
        Ok(BigInteger::from(*d2 - *d1))
    }

    /// Fraction of a year between `d1` and `d2`.
    ///
    /// `ref_start` and `ref_end` delimit the reference coupon period for
    /// conventions that need one; they are [`Date::NULL`] when not given.
    fn year_fraction(&self, d1: &Date, d2: &Date, ref_start: &Date, ref_end: &Date)
        -> Result<Time>;
}

/// A day-count convention.
///
/// Cheap to clone: the rules are shared.  Two day counters compare equal when
/// they are both empty or both have the same name.
#[derive(Clone, Default)]
pub struct DayCounter {
    imp: Option<Arc<dyn DayCounterImpl>>,
}

impl DayCounter {
    /// Create a day counter backed by shared rules.
    pub fn new(imp: Arc<dyn DayCounterImpl>) -> Self {
        DayCounter { imp: Some(imp) }
    }

    /// Create a day counter owning a fresh rule object.
    pub fn from_impl(imp: impl DayCounterImpl + 'static) -> Self {
        DayCounter::new(Arc::new(imp))
    }

    /// `true` if no rules were provided.
    pub fn empty(&self) -> bool {
        self.imp.is_none()
    }

    fn rules(&self) -> Result<&dyn DayCounterImpl> {
        match &self.imp {
            Some(imp) => Ok(imp.as_ref()),
            None => Err(Error::Precondition("no day counter implementation provided".into())),
        }
    }

    /// Name of the convention.
    pub fn name(&self) -> Result<&str> {
        Ok(self.rules()?.name())
    }

    /// Number of days between `d1` and `d2`.
    pub fn day_count(&self, d1: &Date, d2: &Date) -> Result<BigInteger> {
        self.rules()?.day_count(d1, d2)
    }

    /// Fraction of a year between `d1` and `d2`.
    pub fn year_fraction(&self, d1: &Date, d2: &Date) -> Result<Time> {
        self.rules()?.year_fraction(d1, d2, &Date::NULL, &Date::NULL)
    }

    /// Fraction of a year between `d1` and `d2` within the reference period
    /// `[ref_start, ref_end]`.
    pub fn year_fraction_with_ref(
        &self,
        d1: &Date,
        d2: &Date,
        ref_start: &Date,
        ref_end: &Date,
    ) -> Result<Time> {
        self.rules()?.year_fraction(d1, d2, ref_start, ref_end)
    }
}

impl PartialEq for DayCounter {
    fn eq(&self, other: &Self) -> bool {
        match (&self.imp, &other.imp) {
            (None, None) => true,
            (Some(a), Some(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl Eq for DayCounter {}

impl fmt::Display for DayCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.imp {
            Some(imp) => f.write_str(imp.name()),
            None => f.write_str("no day counter implementation"),
        }
    }
}

impl fmt::Debug for DayCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayCounter({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct HalfDays;

    impl DayCounterImpl for HalfDays {
        fn name(&self) -> &str {
            "Half"
        }
        fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
            Ok(self.day_count(d1, d2)? as Time / 2.0)
        }
    }

    #[test]
    fn empty_day_counter() {
        let dc = DayCounter::default();
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert!(dc.empty());
        assert!(matches!(dc.name(), Err(Error::Precondition(_))));
        assert!(matches!(dc.year_fraction(&d, &d), Err(Error::Precondition(_))));
        assert_eq!(dc, DayCounter::default());
    }

    #[test]
    fn default_day_count_and_equality() {
        let dc = DayCounter::from_impl(HalfDays);
        let d1 = Date::from_ymd(2024, 1, 1).unwrap();
        let d2 = Date::from_ymd(2024, 1, 11).unwrap();
        assert_eq!(dc.day_count(&d1, &d2).unwrap(), 10);
        assert_eq!(dc.year_fraction(&d1, &d2).unwrap(), 5.0);
        assert_eq!(dc.clone(), dc);
        assert_ne!(dc, DayCounter::default());
        assert_eq!(dc.to_string(), "Half");
    }
}
