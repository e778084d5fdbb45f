//! TARGET calendar.

use crate::calendar::{Calendar, CalendarImpl};
use crate::date::Date;
use crate::easter::Western;
use crate::month::Month;
use crate::weekday::Weekday;

/// TARGET calendar (Trans-european Automated Real-time Gross Express-settlement
/// Transfer system).
///
/// Holidays:
/// * Saturdays and Sundays
/// * New Year's Day (Jan 1)
/// * Good Friday (since 2000)
/// * Easter Monday (since 2000)
/// * Labour Day (May 1, since 2000)
/// * Christmas (Dec 25)
/// * Day of Goodwill (Dec 26, since 2000)
/// * December 31st of 1998, 1999 and 2001
#[derive(Debug, Clone, Copy)]
pub struct Target;

impl Target {
    /// TARGET calendar.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Calendar {
        Calendar::from_impl(TargetImpl)
    }
}

#[derive(Debug)]
struct TargetImpl;

impl CalendarImpl for TargetImpl {
    fn name(&self) -> &str {
        "TARGET"
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        Western::is_weekend(weekday)
    }

    fn is_business_day(&self, date: &Date) -> bool {
        use Month::*;
        let d = date.day_of_month();
        let dd = date.day_of_year();
        let m = date.month();
        let y = date.year();
        let em = Western::easter_monday(y);
        let holiday = self.is_weekend(date.weekday())
            || (m == January && d == 1)
            || (dd == em - 3 && y >= 2000)
            || (dd == em && y >= 2000)
            || (m == May && d == 1 && y >= 2000)
            || (m == December && d == 25)
            || (m == December && d == 26 && y >= 2000)
            || (m == December && d == 31 && matches!(y, 1998 | 1999 | 2001));
        !holiday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_2023() {
        // Easter Sunday 2023: April 9th
        let cal = Target::new();
        assert!(cal.is_holiday(&date(2023, 4, 7)).unwrap());
        assert!(cal.is_holiday(&date(2023, 4, 10)).unwrap());
        assert!(cal.is_business_day(&date(2023, 4, 11)).unwrap());
    }

    #[test]
    fn holidays_before_2000() {
        let cal = Target::new();
        // Good Friday 1999 and Labour Day 1999 were business days
        assert!(cal.is_business_day(&date(1999, 4, 2)).unwrap());
        assert!(cal.is_holiday(&date(1999, 12, 31)).unwrap());
        assert!(cal.is_holiday(&date(2000, 5, 1)).unwrap());
    }
}
