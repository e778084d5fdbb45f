//! Actual/360 day counter.

use crate::date::{days_between, Date};
use crate::day_counter::{DayCounter, DayCounterImpl};
use ql_core::errors::Result;
use ql_core::Time;

/// Actual/360 day count convention, also known as "Act/360" or "A/360".
///
/// `year_fraction = actual_days / 360`
#[derive(Debug, Clone, Copy)]
pub struct Actual360;

impl Actual360 {
    /// Actual/360 day counter.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> DayCounter {
        DayCounter::from_impl(Actual360Impl)
    }
}

#[derive(Debug)]
struct Actual360Impl;

impl DayCounterImpl for Actual360Impl {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
        Ok(days_between(d1, d2) / 360.0)
    }
}
