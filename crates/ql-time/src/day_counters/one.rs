//! 1/1 day counter.

use crate::date::Date;
use crate::day_counter::{DayCounter, DayCounterImpl};
use ql_core::errors::Result;
use ql_core::{BigInteger, Time};

/// 1/1 day count convention: every period counts as one year.
#[derive(Debug, Clone, Copy)]
pub struct OneDayCounter;

impl OneDayCounter {
    /// 1/1 day counter.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> DayCounter {
        DayCounter::from_impl(OneDayCounterImpl)
    }
}

#[derive(Debug)]
struct OneDayCounterImpl;

impl DayCounterImpl for OneDayCounterImpl {
    fn name(&self) -> &str {
        "1/1"
    }

    fn day_count(&self, d1: &Date, d2: &Date) -> Result<BigInteger> {
        Ok(if d2 >= d1 { 1 } else { -1 })
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
        Ok(self.day_count(d1, d2)? as Time)
    }
}
