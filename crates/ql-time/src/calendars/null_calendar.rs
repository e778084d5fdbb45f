//! Calendar for reproducing theoretical calculations.

use crate::calendar::{Calendar, CalendarImpl};
use crate::date::Date;
use crate::weekday::Weekday;

/// Calendar where every day, weekends included, is a business day.
#[derive(Debug, Clone, Copy)]
pub struct NullCalendar;

impl NullCalendar {
    /// Null calendar.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Calendar {
        Calendar::from_impl(NullCalendarImpl)
    }
}

#[derive(Debug)]
struct NullCalendarImpl;

impl CalendarImpl for NullCalendarImpl {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: &Date) -> bool {
        true
    }

    fn is_weekend(&self, _weekday: Weekday) -> bool {
        false
    }
}
