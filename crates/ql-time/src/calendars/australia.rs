//! Australian calendar.

use crate::calendar::{Calendar, CalendarImpl};
use crate::date::Date;
use crate::easter::Western;
use crate::month::Month;
use crate::weekday::Weekday;

/// Australian calendar.
///
/// Holidays:
/// * Saturdays and Sundays
/// * New Year's Day (Jan 1)
/// * Australia Day (Jan 26; moved to Monday if on a weekend)
/// * Good Friday
/// * Easter Monday
/// * ANZAC Day (Apr 25; moved to Monday if on a Sunday)
/// * Queen's Birthday (second Monday of June)
/// * Bank Holiday (first Monday of August)
/// * Labour Day (first Monday of October)
/// * Christmas Day (Dec 25; moved to Monday or Tuesday if on a weekend)
/// * Boxing Day (Dec 26; moved to Monday or Tuesday if on a weekend)
#[derive(Debug, Clone, Copy)]
pub struct Australia;

impl Australia {
    /// Australian settlement calendar.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Calendar {
        Calendar::from_impl(AustraliaImpl)
    }
}

#[derive(Debug)]
struct AustraliaImpl;

impl CalendarImpl for AustraliaImpl {
    fn name(&self) -> &str {
        "Australia"
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        Western::is_weekend(weekday)
    }

    fn is_business_day(&self, date: &Date) -> bool {
        use Month::*;
        let w = date.weekday();
        let d = date.day_of_month();
        let dd = date.day_of_year();
        let m = date.month();
        let em = Western::easter_monday(date.year());
        let monday = w == Weekday::Monday;
        let monday_or_tuesday = matches!(w, Weekday::Monday | Weekday::Tuesday);

        let holiday = self.is_weekend(w)
            || (m == January && d == 1)
            // Australia Day
            || (m == January && (d == 26 || ((d == 27 || d == 28) && monday)))
            || dd == em - 3
            || dd == em
            // ANZAC Day
            || (m == April && (d == 25 || (d == 26 && monday)))
            // Queen's Birthday
            || (m == June && (8..=14).contains(&d) && monday)
            // Bank Holiday
            || (m == August && d <= 7 && monday)
            // Labour Day
            || (m == October && d <= 7 && monday)
            || (m == December && (d == 25 || (d == 27 && monday_or_tuesday)))
            || (m == December && (d == 26 || (d == 28 && monday_or_tuesday)));
        !holiday
    }
}
