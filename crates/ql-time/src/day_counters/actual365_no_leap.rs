//! Actual/365 (No Leap) day counter.

use crate::date::Date;
use crate::day_counter::{DayCounter, DayCounterImpl};
use crate::month::Month;
use ql_core::errors::Result;
use ql_core::{BigInteger, Time};

/// Days before the first of each month in a non-leap year.
const MONTH_OFFSET: [BigInteger; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Actual/365 (No Leap) day count convention, also known as "Act/365 (NL)",
/// "NL/365" or "Actual/365 (JGB)".
///
/// Every year counts 365 days; February 29th is never counted.
#[derive(Debug, Clone, Copy)]
pub struct Actual365NoLeap;

impl Actual365NoLeap {
    /// Actual/365 (No Leap) day counter.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> DayCounter {
        DayCounter::from_impl(Actual365NoLeapImpl)
    }
}

#[derive(Debug)]
struct Actual365NoLeapImpl;

fn no_leap_serial(d: &Date) -> BigInteger {
    let month = d.month();
    let dom = d.day_of_month();
    let mut s = BigInteger::from(dom)
        + MONTH_OFFSET[usize::from(month.number()) - 1]
        + BigInteger::from(d.year()) * 365;
    if month == Month::February && dom == 29 {
        s -= 1;
    }
    s
}

impl DayCounterImpl for Actual365NoLeapImpl {
    fn name(&self) -> &str {
        "Actual/365 (NL)"
    }

    fn day_count(&self, d1: &Date, d2: &Date) -> Result<BigInteger> {
        Ok(no_leap_serial(d2) - no_leap_serial(d1))
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
        Ok(self.day_count(d1, d2)? as Time / 365.0)
    }
}
