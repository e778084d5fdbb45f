//! United Kingdom calendars.

use crate::calendar::{Calendar, CalendarImpl};
use crate::date::Date;
use crate::easter::Western;
use crate::month::Month;
use crate::weekday::Weekday;

/// United Kingdom calendars.
///
/// Holidays (the settlement, exchange and metals markets share them):
/// * Saturdays and Sundays
/// * New Year's Day (Jan 1; moved to Monday if on a weekend)
/// * Good Friday
/// * Easter Monday
/// * Early May Bank Holiday (first Monday of May)
/// * Spring Bank Holiday (last Monday of May)
/// * Summer Bank Holiday (last Monday of August)
/// * Christmas Day (Dec 25; moved to Monday or Tuesday if on a weekend)
/// * Boxing Day (Dec 26; moved to Monday or Tuesday if on a weekend)
///
/// Special one-off days: the Golden Jubilee (3–4 June 2002), the Royal
/// Wedding (29 April 2011), the Diamond Jubilee (4–5 June 2012) and the
/// millennium (31 December 1999).  The Spring Bank Holiday was replaced by
/// the jubilee days in 2002 and 2012.
#[derive(Debug, Clone, Copy)]
pub struct UnitedKingdom;

impl UnitedKingdom {
    /// UK settlement calendar.
    pub fn settlement() -> Calendar {
        Calendar::from_impl(UnitedKingdomImpl {
            name: "UK settlement",
        })
    }

    /// London stock exchange calendar.
    pub fn exchange() -> Calendar {
        Calendar::from_impl(UnitedKingdomImpl {
            name: "London stock exchange",
        })
    }

    /// London metals exchange calendar.
    pub fn metals() -> Calendar {
        Calendar::from_impl(UnitedKingdomImpl {
            name: "London metals exchange",
        })
    }
}

#[derive(Debug)]
struct UnitedKingdomImpl {
    name: &'static str,
}

impl CalendarImpl for UnitedKingdomImpl {
    fn name(&self) -> &str {
        self.name
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        Western::is_weekend(weekday)
    }

    fn is_business_day(&self, date: &Date) -> bool {
        let w = date.weekday();
        let d = date.day_of_month();
        let dd = date.day_of_year();
        let m = date.month();
        let y = date.year();
        let em = Western::easter_monday(y);
        let monday_or_tuesday = matches!(w, Weekday::Monday | Weekday::Tuesday);

        let holiday = self.is_weekend(w)
            // New Year's Day (possibly moved to Monday)
            || (m == Month::January && (d == 1 || ((d == 2 || d == 3) && w == Weekday::Monday)))
            // Good Friday
            || dd == em - 3
            // Easter Monday
            || dd == em
            // Early May Bank Holiday
            || (m == Month::May && d <= 7 && w == Weekday::Monday)
            // Spring Bank Holiday
            || (m == Month::May && d >= 25 && w == Weekday::Monday && y != 2002 && y != 2012)
            // Summer Bank Holiday
            || (m == Month::August && d >= 25 && w == Weekday::Monday)
            // Christmas (possibly moved to Monday or Tuesday)
            || (m == Month::December && (d == 25 || (d == 27 && monday_or_tuesday)))
            // Boxing Day (possibly moved to Monday or Tuesday)
            || (m == Month::December && (d == 26 || (d == 28 && monday_or_tuesday)))
            // Golden Jubilee
            || (y == 2002 && m == Month::June && (d == 3 || d == 4))
            // Royal Wedding
            || (y == 2011 && m == Month::April && d == 29)
            // Diamond Jubilee
            || (y == 2012 && m == Month::June && (d == 4 || d == 5))
            || (y == 1999 && m == Month::December && d == 31);
        !holiday
    }
}
