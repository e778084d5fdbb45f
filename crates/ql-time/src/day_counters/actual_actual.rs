//! Actual/Actual day counters.
//!
//! The day count is the actual number of days; the year length depends on
//! the convention:
//!
//! * ISMA (Bond): the length of the reference coupon period, as used by the
//!   International Capital Market Association for bonds.
//! * ISDA (Historical, Actual/365): the length of each calendar year the
//!   period touches, as used by the International Swaps and Derivatives
//!   Association.
//! * AFB (Euro): whole years are counted back from the end date and the
//!   remainder is divided by 365, or 366 if it contains February 29th, as
//!   used by the Association Française des Banques.

use crate::date::{days_between, days_in_year, Date};
use crate::day_counter::{DayCounter, DayCounterImpl};
use crate::month::Month;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use ql_core::errors::{Error, Result};
use ql_core::{ensure, Integer, Real, Time};

/// Actual/Actual convention.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActualActualConvention {
    /// ISMA (reference coupon period).
    ISMA,
    /// Same as [`ISMA`](Self::ISMA).
    Bond,
    /// ISDA (calendar years).
    #[default]
    ISDA,
    /// Same as [`ISDA`](Self::ISDA).
    Historical,
    /// Same as [`ISDA`](Self::ISDA).
    Actual365,
    /// AFB (whole years counted back from the end date).
    AFB,
    /// Same as [`AFB`](Self::AFB).
    Euro,
}

impl TryFrom<i32> for ActualActualConvention {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        use ActualActualConvention::*;
        match code {
            0 => Ok(ISMA),
            1 => Ok(Bond),
            2 => Ok(ISDA),
            3 => Ok(Historical),
            4 => Ok(Actual365),
            5 => Ok(AFB),
            6 => Ok(Euro),
            _ => Err(Error::UnsupportedConvention(format!(
                "unknown act/act convention ({code})"
            ))),
        }
    }
}

/// Actual/Actual day count convention.
#[derive(Debug, Clone, Copy)]
pub struct ActualActual;

impl ActualActual {
    /// Actual/Actual day counter for the given convention.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(convention: ActualActualConvention) -> DayCounter {
        use ActualActualConvention::*;
        match convention {
            ISMA | Bond => DayCounter::from_impl(IsmaImpl),
            ISDA | Historical | Actual365 => DayCounter::from_impl(IsdaImpl),
            AFB | Euro => DayCounter::from_impl(AfbImpl),
        }
    }

    /// Actual/Actual (ISDA) day counter.
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> DayCounter {
        ActualActual::new(ActualActualConvention::default())
    }
}

fn months(n: Integer) -> Period {
    Period::new(n, TimeUnit::Months)
}

#[derive(Debug)]
struct IsmaImpl;

impl IsmaImpl {
    /// Reference period to use, with its length in whole months.
    fn reference_period(
        d1: &Date,
        d2: &Date,
        ref_start: &Date,
        ref_end: &Date,
    ) -> Result<(Date, Date, Integer)> {
        // without a reference period, take it equal to (d1, d2)
        let start = if ref_start.is_null() { *d1 } else { *ref_start };
        let end = if ref_end.is_null() { *d2 } else { *ref_end };
        ensure!(
            end > start && end > *d1,
            "invalid reference period: date 1: {d1}, date 2: {d2}, \
             reference period start: {start}, reference period end: {end}"
        );
        // rough estimate of the period length in months
        let n = (0.5 + 12.0 * Real::from(end - start) / 365.0) as Integer;
        if n == 0 {
            // short periods are measured against one year from d1
            let one_year = d1.add_period(Period::new(1, TimeUnit::Years))?;
            Ok((*d1, one_year, 12))
        } else {
            Ok((start, end, n))
        }
    }
}

impl DayCounterImpl for IsmaImpl {
    fn name(&self) -> &str {
        "Actual/Actual (ISMA)"
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, ref_start: &Date, ref_end: &Date)
        -> Result<Time> {
        if d1 == d2 {
            return Ok(0.0);
        }
        if d1 > d2 {
            return Ok(-self.year_fraction(d2, d1, ref_start, ref_end)?);
        }
        let (start, end, n) = Self::reference_period(d1, d2, ref_start, ref_end)?;
        log::trace!("act/act (ISMA) from {d1} to {d2} in [{start}, {end}], {n} months");
        let period = Real::from(n) / 12.0;

        if *d2 <= end {
            if *d1 >= start {
                // start <= d1 <= d2 <= end
                return Ok(period * days_between(d1, d2) / days_between(&start, &end));
            }
            // long first coupon: the reference period starts after d1
            let previous = start.sub_period(months(n))?;
            return if *d2 > start {
                Ok(self.year_fraction(d1, &start, &previous, &start)?
                    + self.year_fraction(&start, d2, &start, &end)?)
            } else {
                self.year_fraction(d1, d2, &previous, &start)
            };
        }

        // d1 < end < d2: the span runs past the reference period
        ensure!(
            start <= *d1,
            "reference period start ({start}) must not be after d1 ({d1})"
        );
        let mut sum = self.year_fraction(d1, &end, &start, &end)?;
        // whole regular periods in [end, d2], then the remainder
        let mut i = 0;
        let (mut new_start, mut new_end);
        loop {
            new_start = end.add_period(months(n * i))?;
            new_end = end.add_period(months(n * (i + 1)))?;
            if *d2 < new_end {
                break;
            }
            sum += period;
            i += 1;
        }
        Ok(sum + self.year_fraction(&new_start, d2, &new_start, &new_end)?)
    }
}

#[derive(Debug)]
struct IsdaImpl;

impl DayCounterImpl for IsdaImpl {
    fn name(&self) -> &str {
        "Actual/Actual (ISDA)"
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
        if d1 == d2 {
            return Ok(0.0);
        }
        if d1 > d2 {
            return Ok(-self.year_fraction(d2, d1, &Date::NULL, &Date::NULL)?);
        }
        let y1 = d1.year();
        let y2 = d2.year();
        let dib1 = Real::from(days_in_year(y1));
        let dib2 = Real::from(days_in_year(y2));
        // days from d1 to January 1st of the following year, and from
        // January 1st of y2 to d2
        let head = dib1 - Real::from(d1.day_of_year()) + 1.0 - d1.fraction_of_day();
        let tail = Real::from(d2.day_of_year()) - 1.0 + d2.fraction_of_day();
        Ok(Real::from(y2) - Real::from(y1) - 1.0 + head / dib1 + tail / dib2)
    }
}

#[derive(Debug)]
struct AfbImpl;

impl DayCounterImpl for AfbImpl {
    fn name(&self) -> &str {
        "Actual/Actual (AFB)"
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
        if d1 == d2 {
            return Ok(0.0);
        }
        if d1 > d2 {
            return Ok(-self.year_fraction(d2, d1, &Date::NULL, &Date::NULL)?);
        }
        // count whole years backwards from d2; a February 28th in a leap
        // year rolls forward to the 29th
        let one_year = Period::new(1, TimeUnit::Years);
        let mut years = 0.0;
        let mut end = *d2;
        loop {
            let Ok(mut prev) = end.sub_period(one_year) else {
                // before the earliest representable date, hence before d1
                break;
            };
            if prev.month() == Month::February
                && prev.day_of_month() == 28
                && Date::is_leap(prev.year())
            {
                prev = prev.add_days(1)?;
            }
            if prev < *d1 {
                break;
            }
            years += 1.0;
            end = prev;
        }

        let mut days_in_year = 365.0;
        let leap_year = if Date::is_leap(end.year()) {
            Some(end.year())
        } else if Date::is_leap(d1.year()) {
            Some(d1.year())
        } else {
            None
        };
        if let Some(y) = leap_year {
            let leap_day = Date::new(29, Month::February, y)?;
            if end > leap_day && *d1 <= leap_day {
                days_in_year += 1.0;
            }
        }
        Ok(years + days_between(d1, &end) / days_in_year)
    }
}
