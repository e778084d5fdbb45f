//! Business/252 day counter.

use crate::calendar::Calendar;
use crate::calendars::Brazil;
use crate::date::Date;
use crate::day_counter::{DayCounter, DayCounterImpl};
use ql_core::errors::Result;
use ql_core::{BigInteger, Time};

/// Business/252 day count convention, used in the Brazilian market.
///
/// Counts the business days of a calendar, first date included and last date
/// excluded, over a 252-day year.
#[derive(Debug, Clone, Copy)]
pub struct Business252;

impl Business252 {
    /// Business/252 day counter over `calendar`.
    ///
    /// # Errors
    /// [`Error::Precondition`](ql_core::Error::Precondition) if the calendar
    /// has no rules.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(calendar: Calendar) -> Result<DayCounter> {
        let name = format!("Business/252({})", calendar.name()?);
        Ok(DayCounter::from_impl(Business252Impl { name, calendar }))
    }

    /// Business/252 day counter over the Brazilian settlement calendar.
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> DayCounter {
        let calendar = Brazil::settlement();
        DayCounter::from_impl(Business252Impl {
            name: format!("Business/252({calendar})"),
            calendar,
        })
    }
}

#[derive(Debug)]
struct Business252Impl {
    name: String,
    calendar: Calendar,
}

impl DayCounterImpl for Business252Impl {
    fn name(&self) -> &str {
        &self.name
    }

    fn day_count(&self, d1: &Date, d2: &Date) -> Result<BigInteger> {
        let days = self.calendar.business_days_between(d1, d2, true, false)?;
        Ok(BigInteger::from(days))
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
        Ok(self.day_count(d1, d2)? as Time / 252.0)
    }
}
