//! Actual/365 (Fixed) day counter.

use crate::date::{days_between, Date};
use crate::day_counter::{DayCounter, DayCounterImpl};
use ql_core::errors::Result;
use ql_core::Time;

/// Actual/365 (Fixed) day count convention, also known as "Act/365 (Fixed)",
/// "A/365 (Fixed)" or "A/365F".
///
/// According to ISDA, "Actual/365" (without "Fixed") is an alias for
/// "Actual/Actual (ISDA)"; use [`ActualActual`](super::ActualActual) for that.
#[derive(Debug, Clone, Copy)]
pub struct Actual365Fixed;

impl Actual365Fixed {
    /// Actual/365 (Fixed) day counter.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> DayCounter {
        DayCounter::from_impl(Actual365FixedImpl)
    }
}

#[derive(Debug)]
struct Actual365FixedImpl;

impl DayCounterImpl for Actual365FixedImpl {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
        Ok(days_between(d1, d2) / 365.0)
    }
}
