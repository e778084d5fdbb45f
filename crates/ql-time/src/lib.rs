//! # ql-time
//!
//! Date, calendar, day counter, period and business-day-convention types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `Calendar` value type and the calendar rule trait.
pub mod calendar;

/// Concrete calendars (country / exchange specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// Schedule date-generation rules.
pub mod date_generation;

/// `DayCounter` value type and the day-count rule trait.
pub mod day_counter;

/// Built-in day-count conventions.
pub mod day_counters;

/// Easter Monday tables and the western/orthodox calendar bases.
pub mod easter;

/// Payment / event frequency.
pub mod frequency;

/// `Month`: month of the year.
pub mod month;

/// `Period`: a time span in a `TimeUnit`.
pub mod period;

/// `TimeUnit`: days, weeks, months, years and sub-day units.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{holiday_list, Calendar, CalendarImpl};
pub use calendars::{Australia, Brazil, NullCalendar, Target, UnitedKingdom, UnitedStates};
pub use date::{days_between, Date};
pub use date_generation::DateGeneration;
pub use day_counter::{DayCounter, DayCounterImpl};
pub use day_counters::{
    Actual360, Actual365Fixed, Actual365NoLeap, ActualActual, ActualActualConvention, Business252,
    OneDayCounter, SimpleDayCounter, Thirty360, Thirty360Convention,
};
pub use easter::{Orthodox, Western};
pub use frequency::Frequency;
pub use month::Month;
pub use period::Period;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
