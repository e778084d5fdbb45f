//! `Date` type.
//!
//! A date is a serial number of days since an epoch, extended with a
//! time of day at microsecond resolution.
//!
//! # Serial number convention
//! * Serial 0 is **December 30, 1899**, the spreadsheet epoch.  It doubles
//!   as the null date returned by `Date::default()`.
//! * Serial 367 = January 1, 1901 and serial 109 574 = December 31, 2199 are
//!   the bounds of the valid range.
//!
//! Equality and ordering compare the full instant, time of day included.
//! The whole-day difference `d2 - d1` ignores the time of day, while
//! [`days_between`] includes it.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::month::Month;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use ql_core::errors::{Error, Result};
use ql_core::{ensure, ensure_kind, Integer, Time};

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// Serial number of 1970-01-01, used to anchor the civil conversions.
const UNIX_EPOCH_SERIAL: i32 = 25_569;

/// A calendar date with an optional time of day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SerialDate", into = "SerialDate")
)]
pub struct Date {
    serial: i32,
    micros: i64,
}

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// The null date (serial 0, December 30, 1899).
    pub const NULL: Date = Date {
        serial: 0,
        micros: 0,
    };

    /// Minimum valid date: January 1, 1901.
    pub const MIN: Date = Date {
        serial: 367,
        micros: 0,
    };

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date {
        serial: 109_574,
        micros: 0,
    };

    /// Resolution of the time of day.
    pub const TICKS_PER_SECOND: i64 = MICROS_PER_SECOND;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// # Errors
    /// [`Error::DateRange`] outside `[367, 109574]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        check_serial(serial)?;
        Ok(Date { serial, micros: 0 })
    }

    /// Create a date from year (1901–2199), month (1–12) and day of month.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if any field is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure_kind!(
            year > 1900 && year < 2200,
            InvalidDate,
            "year {year} out of bound, it must be in [1901, 2199]"
        );
        ensure_kind!(
            (1..=12).contains(&month),
            InvalidDate,
            "month {month} outside [1, 12]"
        );
        let last = days_in_month(year, month);
        ensure_kind!(
            day >= 1 && day <= last,
            InvalidDate,
            "day {day} outside [1, {last}] for {year}-{month:02}"
        );
        Ok(Date {
            serial: serial_from_civil(i32::from(year), i32::from(month), i32::from(day)),
            micros: 0,
        })
    }

    /// Create a date from day, month and year, in that order.
    pub fn new(day: u8, month: Month, year: u16) -> Result<Self> {
        Date::from_ymd(year, month.number(), day)
    }

    /// Attach a time of day, replacing any existing one.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if a field exceeds its natural bound
    /// (23 hours, 59 minutes, 59 seconds, 999 milli- or microseconds).
    pub fn with_time(
        self,
        hours: u32,
        minutes: u32,
        seconds: u32,
        milliseconds: u32,
        microseconds: u32,
    ) -> Result<Self> {
        ensure_kind!(hours < 24, InvalidDate, "hours {hours} outside [0, 23]");
        ensure_kind!(minutes < 60, InvalidDate, "minutes {minutes} outside [0, 59]");
        ensure_kind!(seconds < 60, InvalidDate, "seconds {seconds} outside [0, 59]");
        ensure_kind!(
            milliseconds < 1000,
            InvalidDate,
            "milliseconds {milliseconds} outside [0, 999]"
        );
        ensure_kind!(
            microseconds < 1000,
            InvalidDate,
            "microseconds {microseconds} outside [0, 999]"
        );
        let secs = i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds);
        let micros =
            secs * MICROS_PER_SECOND + i64::from(milliseconds) * 1000 + i64::from(microseconds);
        Ok(Date {
            serial: self.serial,
            micros,
        })
    }

    /// Convert a `chrono` civil instant.
    ///
    /// # Errors
    /// [`Error::DateRange`] if the day falls outside 1901–2199.
    pub fn from_naive_datetime(dt: NaiveDateTime) -> Result<Self> {
        let serial = serial_from_civil(dt.year(), dt.month() as i32, dt.day() as i32);
        check_serial(serial)?;
        // chrono encodes a leap second as nanoseconds >= 1e9
        let nanos = i64::from(dt.nanosecond().min(999_999_999));
        let micros = i64::from(dt.num_seconds_from_midnight()) * MICROS_PER_SECOND + nanos / 1000;
        Ok(Date { serial, micros })
    }

    /// Today's date in the local time zone, at midnight.
    pub fn todays_date() -> Result<Self> {
        Ok(Date::local_date_time()?.date_only())
    }

    /// The current local instant.
    pub fn local_date_time() -> Result<Self> {
        Date::from_naive_datetime(chrono::Local::now().naive_local())
    }

    /// The current UTC instant.
    pub fn universal_date_time() -> Result<Self> {
        Date::from_naive_datetime(chrono::Utc::now().naive_utc())
    }

    /// Earliest valid date.
    pub const fn min_date() -> Date {
        Date::MIN
    }

    /// Latest valid date.
    pub const fn max_date() -> Date {
        Date::MAX
    }

    /// Whether `year` is a leap year.
    pub fn is_leap(year: u16) -> bool {
        is_leap_year(year)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(self) -> i32 {
        self.serial
    }

    /// Return `true` if this is the null date.
    pub fn is_null(self) -> bool {
        self.serial == 0 && self.micros == 0
    }

    /// The same day at midnight.
    pub fn date_only(self) -> Date {
        Date {
            serial: self.serial,
            micros: 0,
        }
    }

    /// Return the year.
    pub fn year(self) -> u16 {
        civil_from_serial(self.serial).0 as u16
    }

    /// Return the month.
    pub fn month(self) -> Month {
        let m = civil_from_serial(self.serial).1;
        Month::ALL[(m - 1) as usize]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(self) -> u8 {
        civil_from_serial(self.serial).2 as u8
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(self) -> u16 {
        let y = civil_from_serial(self.serial).0;
        (self.serial - serial_from_civil(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(self) -> Weekday {
        // serial 0 was a Saturday
        Weekday::ALL[(self.serial + 5).rem_euclid(7) as usize]
    }

    /// Hours past midnight (0–23).
    pub fn hours(self) -> u32 {
        (self.micros / (3600 * MICROS_PER_SECOND)) as u32
    }

    /// Minutes past the hour (0–59).
    pub fn minutes(self) -> u32 {
        (self.micros / (60 * MICROS_PER_SECOND) % 60) as u32
    }

    /// Seconds past the minute (0–59).
    pub fn seconds(self) -> u32 {
        (self.micros / MICROS_PER_SECOND % 60) as u32
    }

    /// Milliseconds past the second (0–999).
    pub fn milliseconds(self) -> u32 {
        (self.micros / 1000 % 1000) as u32
    }

    /// Microseconds past the millisecond (0–999).
    pub fn microseconds(self) -> u32 {
        (self.micros % 1000) as u32
    }

    /// Elapsed fraction of the day, in `[0, 1)`.  Daylight saving is
    /// ignored.
    pub fn fraction_of_day(self) -> Time {
        self.micros as Time / MICROS_PER_DAY as Time
    }

    /// Elapsed fraction of the current second, in `[0, 1)`.
    pub fn fraction_of_second(self) -> Time {
        (self.micros % MICROS_PER_SECOND) as Time / MICROS_PER_SECOND as Time
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days, keeping the time of day.
    ///
    /// # Errors
    /// [`Error::DateRange`] if the result is out of range.
    pub fn add_days(self, n: Integer) -> Result<Self> {
        let serial = self.serial.checked_add(n).ok_or_else(|| {
            Error::DateRange(format!("{self} + {n} days overflows the serial number"))
        })?;
        check_serial(serial)?;
        Ok(Date {
            serial,
            micros: self.micros,
        })
    }

    /// Advance by a period.
    ///
    /// Months and years keep the day of month when the target month is long
    /// enough and clamp to its last day otherwise, so January 31 plus one
    /// month is the end of February while February 28 plus one month is
    /// March 28.
    ///
    /// # Errors
    /// [`Error::DateRange`] if the result is out of range, and
    /// [`Error::ImpossiblePeriodOperation`] for sub-day units.
    pub fn add_period(self, p: Period) -> Result<Self> {
        match p.unit {
            TimeUnit::Days => self.add_days(p.length),
            TimeUnit::Weeks => self.add_days(weeks_to_days(p.length)?),
            TimeUnit::Months => self.add_months(p.length),
            TimeUnit::Years => self.add_months(p.length.saturating_mul(12)),
            unit => Err(Error::ImpossiblePeriodOperation(format!(
                "cannot move a date by {unit}"
            ))),
        }
    }

    /// Move back by a period.  See [`Date::add_period`].
    pub fn sub_period(self, p: Period) -> Result<Self> {
        self.add_period(-p)
    }

    fn add_months(self, n: Integer) -> Result<Self> {
        let (y, m, d) = civil_from_serial(self.serial);
        let total = i64::from(y) * 12 + i64::from(m - 1) + i64::from(n);
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        ensure_kind!(
            year > 1900 && year < 2200,
            DateRange,
            "{self} moved by {n} months falls in year {year}, outside [1901, 2199]"
        );
        let year = year as u16;
        let day = (d as u8).min(days_in_month(year, month));
        Ok(Date {
            serial: serial_from_civil(i32::from(year), i32::from(month), i32::from(day)),
            micros: self.micros,
        })
    }

    /// Return the last day of the month containing this date, at midnight.
    pub fn end_of_month(self) -> Self {
        if self.is_null() {
            return self;
        }
        let (y, m, _) = civil_from_serial(self.serial);
        let last = days_in_month(y as u16, m as u8);
        Date {
            serial: serial_from_civil(y, m, i32::from(last)),
            micros: 0,
        }
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        let (y, m, d) = civil_from_serial(self.serial);
        d as u8 == days_in_month(y as u16, m as u8)
    }

    /// The first date on or after this one falling on `weekday`.
    pub fn next_weekday(self, weekday: Weekday) -> Result<Self> {
        let wd = i32::from(self.weekday().ordinal());
        let target = i32::from(weekday.ordinal());
        let ahead = if wd > target { 7 } else { 0 };
        self.add_days(ahead - wd + target)
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, Month::March, 2024)`
    /// returns the third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// [`Error::Precondition`] if `n` is zero or larger than 5, and
    /// [`Error::InvalidDate`] if the month has no such occurrence.
    pub fn nth_weekday(n: u8, weekday: Weekday, month: Month, year: u16) -> Result<Self> {
        ensure!(n > 0, "zeroth day of week in a given (month, year) is undefined");
        ensure!(n < 6, "no more than 5 weekday in a given (month, year)");
        let first = Date::new(1, month, year)?.weekday().ordinal();
        let target = weekday.ordinal();
        let skip = n - u8::from(target >= first);
        Date::new(1 + target + skip * 7 - first, month, year)
    }

    /// Extended ISO 8601 rendering, e.g. `2016-12-31T21:15:30,015010`.  The
    /// fractional part is omitted when it is zero.
    pub fn iso_string(self) -> String {
        let (y, m, d) = civil_from_serial(self.serial);
        let mut s = format!(
            "{y:04}-{m:02}-{d:02}T{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        );
        let frac = self.micros % MICROS_PER_SECOND;
        if frac != 0 {
            s.push_str(&format!(",{frac:06}"));
        }
        s
    }

    fn time_suffix(self) -> Option<String> {
        (self.micros != 0).then(|| {
            format!(
                "{:02}:{:02}:{:02}.{:06}",
                self.hours(),
                self.minutes(),
                self.seconds(),
                self.micros % MICROS_PER_SECOND
            )
        })
    }
}

fn check_serial(serial: i32) -> Result<()> {
    ensure_kind!(
        (Date::MIN.serial..=Date::MAX.serial).contains(&serial),
        DateRange,
        "date's serial number ({serial}) outside allowed range [{}, {}]",
        Date::MIN.serial,
        Date::MAX.serial
    );
    Ok(())
}

fn weeks_to_days(weeks: Integer) -> Result<Integer> {
    weeks
        .checked_mul(7)
        .ok_or_else(|| Error::DateRange(format!("{weeks} weeks overflow the serial number")))
}

// ── Arithmetic operators ──────────────────────────────────────────────────────
//
// The operators panic where the checked methods would return an error.

impl std::ops::Add<Integer> for Date {
    type Output = Self;
    /// # Panics
    /// If the result is out of range; see [`Date::add_days`].
    fn add(self, rhs: Integer) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<Integer> for Date {
    type Output = Self;
    /// # Panics
    /// If the result is out of range; see [`Date::add_days`].
    fn sub(self, rhs: Integer) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Add<Period> for Date {
    type Output = Self;
    /// # Panics
    /// If [`Date::add_period`] fails.
    fn add(self, rhs: Period) -> Self {
        self.add_period(rhs).expect("date plus period out of range")
    }
}

impl std::ops::Sub<Period> for Date {
    type Output = Self;
    /// # Panics
    /// If [`Date::sub_period`] fails.
    fn sub(self, rhs: Period) -> Self {
        self.sub_period(rhs).expect("date minus period out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = Integer;
    /// Whole days between the two dates, ignoring the time of day.
    fn sub(self, rhs: Date) -> Integer {
        self.serial - rhs.serial
    }
}

impl std::ops::AddAssign<Integer> for Date {
    fn add_assign(&mut self, rhs: Integer) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<Integer> for Date {
    fn sub_assign(&mut self, rhs: Integer) {
        *self = *self - rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        write!(f, "{} {} {}", self.day_of_month(), self.month(), self.year())?;
        match self.time_suffix() {
            Some(t) => write!(f, " {t}"),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Date(null)");
        }
        let (y, m, d) = civil_from_serial(self.serial);
        match self.time_suffix() {
            Some(t) => write!(f, "Date({y:04}-{m:02}-{d:02}T{t})"),
            None => write!(f, "Date({y:04}-{m:02}-{d:02})"),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

/// Wire form of a [`Date`]; deserialization re-validates it.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct SerialDate {
    serial: i32,
    micros: i64,
}

#[cfg(feature = "serde")]
impl From<Date> for SerialDate {
    fn from(d: Date) -> Self {
        SerialDate {
            serial: d.serial,
            micros: d.micros,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<SerialDate> for Date {
    type Error = Error;

    fn try_from(raw: SerialDate) -> Result<Self> {
        ensure_kind!(
            (0..MICROS_PER_DAY).contains(&raw.micros),
            InvalidDate,
            "time of day {} us outside one day",
            raw.micros
        );
        if raw.serial != 0 {
            check_serial(raw.serial)?;
        }
        Ok(Date {
            serial: raw.serial,
            micros: raw.micros,
        })
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Signed real number of days from `d1` to `d2`, including the fraction of
/// day of both instants.
pub fn days_between(d1: &Date, d2: &Date) -> Time {
    Time::from(*d2 - *d1) + d2.fraction_of_day() - d1.fraction_of_day()
}

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Number of days in a given year.
pub fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Serial number of a proleptic Gregorian (year, month, day).
fn serial_from_civil(year: i32, month: i32, day: i32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_SERIAL
}

/// Inverse of [`serial_from_civil`].
fn civil_from_serial(serial: i32) -> (i32, i32, i32) {
    let z = serial - UNIX_EPOCH_SERIAL + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
