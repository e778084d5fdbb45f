//! Simple day counter.

use crate::date::Date;
use crate::day_counter::{DayCounter, DayCounterImpl};
use crate::day_counters::{Thirty360, Thirty360Convention};
use ql_core::errors::Result;
use ql_core::{BigInteger, Time};

/// Simple day counter for reproducing theoretical calculations.
///
/// Whole-month periods count exactly: two dates on the same day of the
/// month, or both at month end, give `years + months / 12`.  Anything else
/// falls back to 30/360 (Bond Basis).  Only meant for dates produced by a
/// calendar that keeps whole-month-distant dates on the same day, such as
/// [`NullCalendar`](crate::calendars::NullCalendar).
#[derive(Debug, Clone, Copy)]
pub struct SimpleDayCounter;

impl SimpleDayCounter {
    /// Simple day counter.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> DayCounter {
        DayCounter::from_impl(SimpleDayCounterImpl {
            fallback: Thirty360::new(Thirty360Convention::BondBasis),
        })
    }
}

#[derive(Debug)]
struct SimpleDayCounterImpl {
    fallback: DayCounter,
}

impl DayCounterImpl for SimpleDayCounterImpl {
    fn name(&self) -> &str {
        "Simple"
    }

    fn day_count(&self, d1: &Date, d2: &Date) -> Result<BigInteger> {
        self.fallback.day_count(d1, d2)
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
        let dm1 = d1.day_of_month();
        let dm2 = d2.day_of_month();
        let whole_months = dm1 == dm2
            || (dm1 > dm2 && d2.is_end_of_month())
            || (dm1 < dm2 && d1.is_end_of_month());
        if whole_months {
            let years = Time::from(d2.year()) - Time::from(d1.year());
            let months = Time::from(d2.month().number()) - Time::from(d1.month().number());
            Ok(years + months / 12.0)
        } else {
            self.fallback.year_fraction(d1, d2)
        }
    }
}
