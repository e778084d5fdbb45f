//! Brazilian calendars.

use crate::calendar::{Calendar, CalendarImpl};
use crate::date::Date;
use crate::easter::Western;
use crate::month::Month;
use crate::weekday::Weekday;

/// Brazilian calendars.
///
/// Settlement holidays:
/// * Saturdays and Sundays
/// * New Year's Day (Jan 1)
/// * Tiradentes's Day (Apr 21)
/// * Labour Day (May 1)
/// * Independence Day (Sep 7)
/// * Nossa Sra. Aparecida Day (Oct 12)
/// * All Souls Day (Nov 2)
/// * Republic Day (Nov 15)
/// * Christmas (Dec 25)
/// * Passion of Christ (Good Friday)
/// * Carnival (Monday and Tuesday before Ash Wednesday)
/// * Corpus Christi
///
/// The BOVESPA exchange adds São Paulo city's anniversary (Jan 25),
/// the Revolution Day (Jul 9), Black Consciousness Day (Nov 20, since 2007),
/// Christmas Eve (Dec 24) and the last business day of the year.
#[derive(Debug, Clone, Copy)]
pub struct Brazil;

impl Brazil {
    /// Brazilian settlement calendar.
    pub fn settlement() -> Calendar {
        Calendar::from_impl(SettlementImpl)
    }

    /// BOVESPA exchange calendar.
    pub fn exchange() -> Calendar {
        Calendar::from_impl(ExchangeImpl)
    }
}

fn is_settlement_holiday(date: &Date) -> bool {
    use Month::*;
    let d = date.day_of_month();
    let dd = date.day_of_year();
    let em = Western::easter_monday(date.year());
    let fixed = matches!(
        (date.month(), d),
        (January, 1)
            | (April, 21)
            | (May, 1)
            | (September, 7)
            | (October, 12)
            | (November, 2)
            | (November, 15)
            | (December, 25)
    );
    fixed
        // Passion of Christ
        || dd == em - 3
        // Carnival
        || dd == em - 49
        || dd == em - 48
        // Corpus Christi
        || dd == em + 59
}

#[derive(Debug)]
struct SettlementImpl;

impl CalendarImpl for SettlementImpl {
    fn name(&self) -> &str {
        "Brazil"
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        Western::is_weekend(weekday)
    }

    fn is_business_day(&self, date: &Date) -> bool {
        !(self.is_weekend(date.weekday()) || is_settlement_holiday(date))
    }
}

#[derive(Debug)]
struct ExchangeImpl;

impl CalendarImpl for ExchangeImpl {
    fn name(&self) -> &str {
        "BOVESPA"
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        Western::is_weekend(weekday)
    }

    fn is_business_day(&self, date: &Date) -> bool {
        use Month::*;
        let w = date.weekday();
        let d = date.day_of_month();
        let m = date.month();
        let holiday = self.is_weekend(w)
            || is_settlement_holiday(date)
            || (m == January && d == 25)
            || (m == July && d == 9)
            || (m == November && d == 20 && date.year() >= 2007)
            || (m == December && d == 24)
            // last trading day of the year
            || (m == December && (d == 31 || (d >= 29 && w == Weekday::Friday)));
        !holiday
    }
}
