//! 30/360 day counters.

use crate::date::Date;
use crate::day_counter::{DayCounter, DayCounterImpl};
use ql_core::errors::{Error, Result};
use ql_core::{BigInteger, Time};

/// Variant of the 30/360 convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thirty360Convention {
    /// 30/360 US (NASD) method.
    USA,
    /// Same as [`USA`](Self::USA).
    BondBasis,
    /// 30E/360 (Eurobond basis) method.
    European,
    /// Same as [`European`](Self::European).
    EurobondBasis,
    /// Italian method.
    Italian,
}

impl TryFrom<i32> for Thirty360Convention {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        use Thirty360Convention::*;
        match code {
            0 => Ok(USA),
            1 => Ok(BondBasis),
            2 => Ok(European),
            3 => Ok(EurobondBasis),
            4 => Ok(Italian),
            _ => Err(Error::UnsupportedConvention(format!(
                "unknown 30/360 convention ({code})"
            ))),
        }
    }
}

/// 30/360 day count convention.
///
/// All variants share
/// `360*(y2-y1) + 30*(m2-m1-1) + max(0, 30-d1) + min(30, d2)` and differ in
/// how the endpoints are adjusted first:
///
/// * US: if the second date is the 31st and the first is before the 30th,
///   the second date becomes the first of the following month.
/// * European: dates on the 31st count as the 30th.
/// * Italian: as European, and February dates after the 27th count as the
///   30th.
#[derive(Debug, Clone, Copy)]
pub struct Thirty360;

impl Thirty360 {
    /// 30/360 day counter for the given convention.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(convention: Thirty360Convention) -> DayCounter {
        use Thirty360Convention::*;
        let method = match convention {
            USA | BondBasis => Method::Us,
            European | EurobondBasis => Method::European,
            Italian => Method::Italian,
        };
        DayCounter::from_impl(Thirty360Impl { method })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Us,
    European,
    Italian,
}

#[derive(Debug)]
struct Thirty360Impl {
    method: Method,
}

impl DayCounterImpl for Thirty360Impl {
    fn name(&self) -> &str {
        match self.method {
            Method::Us => "30/360 (Bond Basis)",
            Method::European => "30E/360 (Eurobond Basis)",
            Method::Italian => "30/360 (Italian)",
        }
    }

    fn day_count(&self, d1: &Date, d2: &Date) -> Result<BigInteger> {
        let mut dd1 = BigInteger::from(d1.day_of_month());
        let mut dd2 = BigInteger::from(d2.day_of_month());
        let mm1 = BigInteger::from(d1.month().number());
        let mut mm2 = BigInteger::from(d2.month().number());
        let yy1 = BigInteger::from(d1.year());
        let yy2 = BigInteger::from(d2.year());

        match self.method {
            Method::Us => {
                if dd2 == 31 && dd1 < 30 {
                    dd2 = 1;
                    mm2 += 1;
                }
            }
            Method::European => {}
            Method::Italian => {
                if mm1 == 2 && dd1 > 27 {
                    dd1 = 30;
                }
                if mm2 == 2 && dd2 > 27 {
                    dd2 = 30;
                }
            }
        }

        Ok(360 * (yy2 - yy1) + 30 * (mm2 - mm1 - 1) + (30 - dd1).max(0) + dd2.min(30))
    }

    fn year_fraction(&self, d1: &Date, d2: &Date, _: &Date, _: &Date) -> Result<Time> {
        Ok(self.day_count(d1, d2)? as Time / 360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn six_months() {
        let dc = Thirty360::new(Thirty360Convention::BondBasis);
        let d1 = date(2023, 1, 15);
        let d2 = date(2023, 7, 15);
        assert_eq!(dc.day_count(&d1, &d2).unwrap(), 180);
        assert_abs_diff_eq!(dc.year_fraction(&d1, &d2).unwrap(), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn end_of_month_handling() {
        let us = Thirty360::new(Thirty360Convention::USA);
        let eu = Thirty360::new(Thirty360Convention::European);
        let it = Thirty360::new(Thirty360Convention::Italian);
        // first date before the 30th, second date on the 31st
        let d1 = date(2006, 2, 28);
        let d2 = date(2006, 3, 31);
        assert_eq!(us.day_count(&d1, &d2).unwrap(), 33);
        assert_eq!(eu.day_count(&d1, &d2).unwrap(), 32);
        assert_eq!(it.day_count(&d1, &d2).unwrap(), 30);
    }

    #[test]
    fn names_and_codes() {
        assert_eq!(
            Thirty360::new(Thirty360Convention::USA),
            Thirty360::new(Thirty360Convention::BondBasis)
        );
        assert_eq!(
            Thirty360::new(Thirty360Convention::EurobondBasis).name().unwrap(),
            "30E/360 (Eurobond Basis)"
        );
        assert_eq!(
            Thirty360::new(Thirty360Convention::Italian).name().unwrap(),
            "30/360 (Italian)"
        );
        assert_eq!(Thirty360Convention::try_from(4), Ok(Thirty360Convention::Italian));
        assert!(matches!(
            Thirty360Convention::try_from(5),
            Err(Error::UnsupportedConvention(_))
        ));
    }
}
