//! United States calendars.

use crate::calendar::{Calendar, CalendarImpl};
use crate::date::Date;
use crate::easter::Western;
use crate::month::Month;
use crate::weekday::Weekday;

/// United States calendars.
///
/// * [`settlement`](Self::settlement): federal holidays, with weekend
///   holidays moved to the nearest weekday.
/// * [`nyse`](Self::nyse): New York stock exchange holidays, including the
///   historical closings since 1954.
/// * [`government_bond`](Self::government_bond): federal holidays plus Good
///   Friday.
/// * [`nerc`](Self::nerc): the North American Energy Reliability Council
///   off-peak days.
#[derive(Debug, Clone, Copy)]
pub struct UnitedStates;

impl UnitedStates {
    /// US settlement calendar.
    pub fn settlement() -> Calendar {
        Calendar::from_impl(SettlementImpl)
    }

    /// New York stock exchange calendar.
    pub fn nyse() -> Calendar {
        Calendar::from_impl(NyseImpl)
    }

    /// US government bond market calendar.
    pub fn government_bond() -> Calendar {
        Calendar::from_impl(GovernmentBondImpl)
    }

    /// North American Energy Reliability Council calendar.
    pub fn nerc() -> Calendar {
        Calendar::from_impl(NercImpl)
    }
}

/// Fields of a date the holiday rules look at.
struct Parts {
    d: u8,
    dd: u16,
    m: Month,
    y: u16,
    w: Weekday,
}

impl Parts {
    fn of(date: &Date) -> Self {
        Parts {
            d: date.day_of_month(),
            dd: date.day_of_year(),
            m: date.month(),
            y: date.year(),
            w: date.weekday(),
        }
    }

    fn new_years_day(&self) -> bool {
        self.m == Month::January && (self.d == 1 || (self.d == 2 && self.w == Weekday::Monday))
    }

    fn martin_luther_king_day(&self) -> bool {
        self.m == Month::January && (15..=21).contains(&self.d) && self.w == Weekday::Monday
    }

    fn washington_birthday(&self) -> bool {
        let (d, w) = (self.d, self.w);
        if self.y >= 1971 {
            // third Monday of February
            self.m == Month::February && (15..=21).contains(&d) && w == Weekday::Monday
        } else {
            self.m == Month::February
                && (d == 22 || (d == 23 && w == Weekday::Monday) || (d == 21 && w == Weekday::Friday))
        }
    }

    fn good_friday(&self) -> bool {
        self.dd == Western::easter_monday(self.y) - 3
    }

    fn memorial_day(&self) -> bool {
        let (d, w) = (self.d, self.w);
        if self.y >= 1971 {
            // last Monday of May
            self.m == Month::May && d >= 25 && w == Weekday::Monday
        } else {
            self.m == Month::May
                && (d == 30 || (d == 31 && w == Weekday::Monday) || (d == 29 && w == Weekday::Friday))
        }
    }

    fn independence_day(&self) -> bool {
        let (d, w) = (self.d, self.w);
        self.m == Month::July
            && (d == 4 || (d == 5 && w == Weekday::Monday) || (d == 3 && w == Weekday::Friday))
    }

    fn labor_day(&self) -> bool {
        self.m == Month::September && self.d <= 7 && self.w == Weekday::Monday
    }

    fn columbus_day(&self) -> bool {
        self.y >= 1971
            && self.m == Month::October
            && (8..=14).contains(&self.d)
            && self.w == Weekday::Monday
    }

    fn veterans_day(&self) -> bool {
        let (d, w) = (self.d, self.w);
        if self.y <= 1970 || self.y >= 1978 {
            self.m == Month::November
                && (d == 11 || (d == 12 && w == Weekday::Monday) || (d == 10 && w == Weekday::Friday))
        } else {
            // fourth Monday of October
            self.m == Month::October && (22..=28).contains(&d) && w == Weekday::Monday
        }
    }

    fn thanksgiving(&self) -> bool {
        self.m == Month::November && (22..=28).contains(&self.d) && self.w == Weekday::Thursday
    }

    fn christmas(&self) -> bool {
        let (d, w) = (self.d, self.w);
        self.m == Month::December
            && (d == 25 || (d == 26 && w == Weekday::Monday) || (d == 24 && w == Weekday::Friday))
    }
}

#[derive(Debug)]
struct SettlementImpl;

impl CalendarImpl for SettlementImpl {
    fn name(&self) -> &str {
        "US settlement"
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        Western::is_weekend(weekday)
    }

    fn is_business_day(&self, date: &Date) -> bool {
        let p = Parts::of(date);
        let holiday = self.is_weekend(p.w)
            || p.new_years_day()
            // New Year's Day on a Saturday
            || (p.m == Month::December && p.d == 31 && p.w == Weekday::Friday)
            || (p.y >= 1983 && p.martin_luther_king_day())
            || p.washington_birthday()
            || p.memorial_day()
            || p.independence_day()
            || p.labor_day()
            || p.columbus_day()
            || p.veterans_day()
            || p.thanksgiving()
            || p.christmas();
        !holiday
    }
}

#[derive(Debug)]
struct NyseImpl;

impl NyseImpl {
    /// Presidential election days until 1980.
    fn election_day(p: &Parts) -> bool {
        (p.y <= 1968 || (p.y <= 1980 && p.y % 4 == 0))
            && p.m == Month::November
            && p.d <= 7
            && p.w == Weekday::Tuesday
    }

    fn special_closing(p: &Parts) -> bool {
        use Month::*;
        let (y, m, d) = (p.y, p.m, p.d);
        // Hurricane Sandy
        (y == 2012 && m == October && (d == 29 || d == 30))
            // President Ford's funeral
            || (y == 2007 && m == January && d == 2)
            // President Reagan's funeral
            || (y == 2004 && m == June && d == 11)
            // September 11
            || (y == 2001 && m == September && (11..=14).contains(&d))
            // President Nixon's funeral
            || (y == 1994 && m == April && d == 27)
            // Hurricane Gloria
            || (y == 1985 && m == September && d == 27)
            // 1977 blackout
            || (y == 1977 && m == July && d == 14)
            // President Johnson's funeral
            || (y == 1973 && m == January && d == 25)
            // President Truman's funeral
            || (y == 1972 && m == December && d == 28)
            // first lunar landing
            || (y == 1969 && m == July && d == 21)
            // President Eisenhower's funeral
            || (y == 1969 && m == March && d == 31)
            // heavy snow
            || (y == 1969 && m == February && d == 10)
            // day after Independence Day
            || (y == 1968 && m == July && d == 5)
            // paperwork crisis: Wednesdays from mid-June 1968
            || (y == 1968 && p.dd >= 163 && p.w == Weekday::Wednesday)
            // Dr. Martin Luther King's funeral
            || (y == 1968 && m == April && d == 9)
            // President Kennedy's funeral
            || (y == 1963 && m == November && d == 25)
            // day before Decoration Day
            || (y == 1961 && m == May && d == 29)
            // day after Christmas
            || (y == 1958 && m == December && d == 26)
            // Christmas Eve
            || (matches!(y, 1954 | 1956 | 1965) && m == December && d == 24)
    }
}

impl CalendarImpl for NyseImpl {
    fn name(&self) -> &str {
        "New York stock exchange"
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        Western::is_weekend(weekday)
    }

    fn is_business_day(&self, date: &Date) -> bool {
        let p = Parts::of(date);
        let holiday = self.is_weekend(p.w)
            || p.new_years_day()
            || p.washington_birthday()
            || p.good_friday()
            || p.memorial_day()
            || p.independence_day()
            || p.labor_day()
            || p.thanksgiving()
            || p.christmas()
            || (p.y >= 1998 && p.martin_luther_king_day())
            || Self::election_day(&p)
            || Self::special_closing(&p);
        !holiday
    }
}

#[derive(Debug)]
struct GovernmentBondImpl;

impl CalendarImpl for GovernmentBondImpl {
    fn name(&self) -> &str {
        "US government bond market"
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        Western::is_weekend(weekday)
    }

    fn is_business_day(&self, date: &Date) -> bool {
        let p = Parts::of(date);
        let holiday = self.is_weekend(p.w)
            || p.new_years_day()
            || (p.y >= 1983 && p.martin_luther_king_day())
            || p.washington_birthday()
            || p.good_friday()
            || p.memorial_day()
            || p.independence_day()
            || p.labor_day()
            || p.columbus_day()
            || p.veterans_day()
            || p.thanksgiving()
            || p.christmas();
        !holiday
    }
}

#[derive(Debug)]
struct NercImpl;

impl CalendarImpl for NercImpl {
    fn name(&self) -> &str {
        "North American Energy Reliability Council"
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        Western::is_weekend(weekday)
    }

    fn is_business_day(&self, date: &Date) -> bool {
        let p = Parts::of(date);
        let (d, m, w) = (p.d, p.m, p.w);
        let holiday = self.is_weekend(w)
            || p.new_years_day()
            || p.memorial_day()
            // Independence Day, moved forward only
            || (m == Month::July && (d == 4 || (d == 5 && w == Weekday::Monday)))
            || p.labor_day()
            || p.thanksgiving()
            // Christmas, moved forward only
            || (m == Month::December && (d == 25 || (d == 26 && w == Weekday::Monday)));
        !holiday
    }
}
