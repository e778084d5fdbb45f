//! `Calendar` value type and the [`CalendarImpl`] rule trait.
//!
//! A calendar knows which dates are business days and can adjust and
//! advance dates according to a [`BusinessDayConvention`].  The holiday rules
//! live in a shared, immutable [`CalendarImpl`]; each `Calendar` value adds a
//! small overlay of dates explicitly added as holidays or removed from the
//! holiday list.  The overlay is copy-on-write: [`Calendar::add_holiday`] and
//! [`Calendar::remove_holiday`] return a new calendar and leave the receiver
//! untouched.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use ql_core::errors::{Error, Result};
use ql_core::{ensure, ensure_kind, Integer};

/// Holiday rules of a market.
///
/// Implementors are stateless predicates; they are shared behind an `Arc`
/// by every [`Calendar`] built from them.
pub trait CalendarImpl: fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"New York stock exchange"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day under these rules.
    fn is_business_day(&self, date: &Date) -> bool;

    /// Return `true` if `weekday` is part of the weekend.
    fn is_weekend(&self, weekday: Weekday) -> bool;
}

/// A financial calendar.
///
/// Cheap to clone: the rules are shared and the overlay sets are
/// reference-counted.  Two calendars compare equal when they are both empty
/// or both have rules with the same name; the overlay is not compared.
#[derive(Clone, Default)]
pub struct Calendar {
    imp: Option<Arc<dyn CalendarImpl>>,
    added: Arc<BTreeSet<Date>>,
    removed: Arc<BTreeSet<Date>>,
}

impl Calendar {
    /// Create a calendar backed by shared rules.
    pub fn new(imp: Arc<dyn CalendarImpl>) -> Self {
        Calendar {
            imp: Some(imp),
            added: Arc::default(),
            removed: Arc::default(),
        }
    }

    /// Create a calendar owning a fresh rule object.
    pub fn from_impl(imp: impl CalendarImpl + 'static) -> Self {
        Calendar::new(Arc::new(imp))
    }

    /// `true` if no rules were provided.
    pub fn empty(&self) -> bool {
        self.imp.is_none()
    }

    fn rules(&self) -> Result<&dyn CalendarImpl> {
        match &self.imp {
            Some(imp) => Ok(imp.as_ref()),
            None => Err(Error::Precondition("no calendar implementation provided".into())),
        }
    }

    /// Name of the underlying rules.
    pub fn name(&self) -> Result<&str> {
        Ok(self.rules()?.name())
    }

    /// Return `true` if `date` is a business day.
    ///
    /// Explicitly added holidays and removed holidays take precedence over
    /// the rules.  The overlay only looks at the day, not the time of day.
    pub fn is_business_day(&self, date: &Date) -> Result<bool> {
        let rules = self.rules()?;
        let day = date.date_only();
        if self.added.contains(&day) {
            return Ok(false);
        }
        if self.removed.contains(&day) {
            return Ok(true);
        }
        Ok(rules.is_business_day(date))
    }

    /// Return `true` if `date` is a holiday (non-business) day.
    pub fn is_holiday(&self, date: &Date) -> Result<bool> {
        Ok(!self.is_business_day(date)?)
    }

    /// Return `true` if `weekday` is a weekend day for these rules.
    pub fn is_weekend(&self, weekday: Weekday) -> Result<bool> {
        Ok(self.rules()?.is_weekend(weekday))
    }

    /// Return `true` if `date` is on or after the last business day of its
    /// month.
    pub fn is_end_of_month(&self, date: &Date) -> Result<bool> {
        Ok(date.date_only() >= self.end_of_month(date)?)
    }

    /// Return the last business day of the month containing `date`.
    pub fn end_of_month(&self, date: &Date) -> Result<Date> {
        self.adjust(&date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Dates explicitly added as holidays.
    pub fn added_holidays(&self) -> &BTreeSet<Date> {
        &self.added
    }

    /// Dates explicitly removed from the holiday list.
    pub fn removed_holidays(&self) -> &BTreeSet<Date> {
        &self.removed
    }

    /// Return a copy of this calendar with `date` marked as a holiday.
    ///
    /// Undoes an earlier [`remove_holiday`](Self::remove_holiday) of the same
    /// day; a day the rules already treat as a holiday is not recorded.
    pub fn add_holiday(&self, date: &Date) -> Result<Calendar> {
        let rules = self.rules()?;
        let day = date.date_only();
        let mut removed = (*self.removed).clone();
        removed.remove(&day);
        let mut added = (*self.added).clone();
        if rules.is_business_day(&day) {
            added.insert(day);
        }
        log::debug!("{}: {day} added as a holiday", rules.name());
        Ok(Calendar {
            imp: self.imp.clone(),
            added: Arc::new(added),
            removed: Arc::new(removed),
        })
    }

    /// Return a copy of this calendar with `date` marked as a business day.
    ///
    /// Undoes an earlier [`add_holiday`](Self::add_holiday) of the same day;
    /// a day the rules already treat as a business day is not recorded.
    pub fn remove_holiday(&self, date: &Date) -> Result<Calendar> {
        let rules = self.rules()?;
        let day = date.date_only();
        let mut added = (*self.added).clone();
        added.remove(&day);
        let mut removed = (*self.removed).clone();
        if !rules.is_business_day(&day) {
            removed.insert(day);
        }
        log::debug!("{}: {day} removed from the holidays", rules.name());
        Ok(Calendar {
            imp: self.imp.clone(),
            added: Arc::new(added),
            removed: Arc::new(removed),
        })
    }

    /// Adjust a non-business day according to `convention`.
    ///
    /// # Errors
    /// [`Error::NullDate`] for the null date,
    /// [`Error::UnsupportedConvention`] for
    /// [`BusinessDayConvention::Unknown`], and [`Error::DateRange`] if the walk
    /// leaves the valid date range.
    pub fn adjust(&self, date: &Date, convention: BusinessDayConvention) -> Result<Date> {
        use BusinessDayConvention::*;
        ensure_kind!(!date.is_null(), NullDate, "cannot adjust the null date");
        match convention {
            Unadjusted => Ok(*date),
            Following | ModifiedFollowing | HalfMonthModifiedFollowing => {
                let mut d = *date;
                while self.is_holiday(&d)? {
                    d = d.add_days(1)?;
                }
                let crossed_month = d.month() != date.month();
                let crossed_mid_month = date.day_of_month() <= 15 && d.day_of_month() > 15;
                match convention {
                    ModifiedFollowing if crossed_month => self.adjust(date, Preceding),
                    HalfMonthModifiedFollowing if crossed_month || crossed_mid_month => {
                        self.adjust(date, Preceding)
                    }
                    _ => Ok(d),
                }
            }
            Preceding | ModifiedPreceding => {
                let mut d = *date;
                while self.is_holiday(&d)? {
                    d = d.add_days(-1)?;
                }
                if convention == ModifiedPreceding && d.month() != date.month() {
                    return self.adjust(date, Following);
                }
                Ok(d)
            }
            Nearest => {
                // ties go forward; a cursor stops at the end of the valid range
                let mut forward = *date;
                let mut backward = *date;
                loop {
                    if self.is_business_day(&forward)? {
                        return Ok(forward);
                    }
                    if self.is_business_day(&backward)? {
                        return Ok(backward);
                    }
                    let can_forward = forward.serial() < Date::MAX.serial();
                    let can_backward = backward.serial() > Date::MIN.serial();
                    ensure_kind!(
                        can_forward || can_backward,
                        DateRange,
                        "no business day near {date} within the valid range"
                    );
                    if can_forward {
                        forward = forward.add_days(1)?;
                    }
                    if can_backward {
                        backward = backward.add_days(-1)?;
                    }
                }
            }
            Unknown => Err(Error::UnsupportedConvention(format!(
                "unknown business-day convention ({convention})"
            ))),
        }
    }

    /// Advance `date` by `n` units and adjust the result.
    ///
    /// Days count business days only.  Weeks are calendar weeks, adjusted
    /// with `convention`.  For months and years, `end_of_month` keeps a date
    /// sitting on the last business day of its month on the last business
    /// day of the target month.
    pub fn advance(
        &self,
        date: &Date,
        n: Integer,
        unit: TimeUnit,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Date> {
        ensure_kind!(!date.is_null(), NullDate, "cannot advance the null date");
        if n == 0 {
            return self.adjust(date, convention);
        }
        match unit {
            TimeUnit::Days => {
                let step = n.signum();
                let mut d = *date;
                for _ in 0..n.unsigned_abs() {
                    d = d.add_days(step)?;
                    while self.is_holiday(&d)? {
                        d = d.add_days(step)?;
                    }
                }
                Ok(d)
            }
            TimeUnit::Weeks => {
                let d = date.add_period(Period::new(n, unit))?;
                self.adjust(&d, convention)
            }
            TimeUnit::Months | TimeUnit::Years => {
                let d = date.add_period(Period::new(n, unit))?;
                if end_of_month && self.is_end_of_month(date)? {
                    self.end_of_month(&d)
                } else {
                    self.adjust(&d, convention)
                }
            }
            unit => Err(Error::ImpossiblePeriodOperation(format!(
                "cannot advance a date by {unit}"
            ))),
        }
    }

    /// [`advance`](Self::advance) by a [`Period`].
    pub fn advance_by_period(
        &self,
        date: &Date,
        period: Period,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Date> {
        self.advance(date, period.length, period.unit, convention, end_of_month)
    }

    /// Count the business days from `from` to `to`.
    ///
    /// The count is negative when `from > to`.  The endpoints are counted
    /// according to `include_first` and `include_last`; equal dates give 0.
    pub fn business_days_between(
        &self,
        from: &Date,
        to: &Date,
        include_first: bool,
        include_last: bool,
    ) -> Result<Integer> {
        ensure_kind!(
            !from.is_null() && !to.is_null(),
            NullDate,
            "cannot count business days from {from} to {to}"
        );
        if from == to {
            return Ok(0);
        }
        let (start, end) = if from < to { (from, to) } else { (to, from) };
        let mut count = 0;
        let mut d = *start;
        while d < *end {
            if self.is_business_day(&d)? {
                count += 1;
            }
            d = d.add_days(1)?;
        }
        if self.is_business_day(end)? {
            count += 1;
        }
        if self.is_business_day(from)? && !include_first {
            count -= 1;
        }
        if self.is_business_day(to)? && !include_last {
            count -= 1;
        }
        Ok(if from > to { -count } else { count })
    }
}

/// Every holiday of `calendar` from `from` to `to`, both included.
///
/// Days that are holidays only because they fall on a weekend are skipped
/// unless `include_weekends` is set.
pub fn holiday_list(
    calendar: &Calendar,
    from: &Date,
    to: &Date,
    include_weekends: bool,
) -> Result<Vec<Date>> {
    ensure_kind!(
        !from.is_null() && !to.is_null(),
        NullDate,
        "cannot list holidays from {from} to {to}"
    );
    ensure!(to > from, "'from' date ({from}) must be earlier than 'to' date ({to})");
    let mut result = Vec::new();
    let mut d = *from;
    while d <= *to {
        if calendar.is_holiday(&d)? && (include_weekends || !calendar.is_weekend(d.weekday())?) {
            result.push(d);
        }
        if d.serial() == Date::MAX.serial() {
            break;
        }
        d = d.add_days(1)?;
    }
    log::trace!(
        "{} holidays for {} between {from} and {to}",
        result.len(),
        calendar
    );
    Ok(result)
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        match (&self.imp, &other.imp) {
            (None, None) => true,
            (Some(a), Some(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl Eq for Calendar {}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.imp {
            Some(imp) => f.write_str(imp.name()),
            None => f.write_str("null calendar"),
        }
    }
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("name", &self.to_string())
            .field("added", &self.added)
            .field("removed", &self.removed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Weekends plus every 13th of the month.
    #[derive(Debug)]
    struct Unlucky;

    impl CalendarImpl for Unlucky {
        fn name(&self) -> &str {
            "Unlucky"
        }
        fn is_business_day(&self, date: &Date) -> bool {
            !self.is_weekend(date.weekday()) && date.day_of_month() != 13
        }
        fn is_weekend(&self, weekday: Weekday) -> bool {
            matches!(weekday, Weekday::Saturday | Weekday::Sunday)
        }
    }

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_calendar() {
        let cal = Calendar::default();
        assert!(cal.empty());
        assert!(matches!(cal.name(), Err(Error::Precondition(_))));
        assert!(matches!(
            cal.is_business_day(&date(2024, 1, 2)),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(
            cal.adjust(&Date::default(), BusinessDayConvention::Following),
            Err(Error::NullDate(_))
        ));
        assert_eq!(cal, Calendar::default());
        assert_eq!(cal.to_string(), "null calendar");
    }

    #[test]
    fn adjust_conventions() {
        use BusinessDayConvention::*;
        let cal = Calendar::from_impl(Unlucky);
        // 2024-09-13 is a Friday; the 14th and 15th are a weekend
        let friday = date(2024, 9, 13);
        assert_eq!(cal.adjust(&friday, Following).unwrap(), date(2024, 9, 16));
        assert_eq!(cal.adjust(&friday, ModifiedFollowing).unwrap(), date(2024, 9, 16));
        assert_eq!(
            cal.adjust(&friday, HalfMonthModifiedFollowing).unwrap(),
            date(2024, 9, 12)
        );
        assert_eq!(cal.adjust(&friday, Preceding).unwrap(), date(2024, 9, 12));
        assert_eq!(cal.adjust(&friday, Unadjusted).unwrap(), friday);
        // Saturday 14th: Thursday and Monday are both two days away
        assert_eq!(cal.adjust(&date(2024, 9, 14), Nearest).unwrap(), date(2024, 9, 16));
        assert_eq!(cal.adjust(&date(2024, 9, 7), Nearest).unwrap(), date(2024, 9, 6));
        assert_eq!(cal.adjust(&date(2024, 9, 8), Nearest).unwrap(), date(2024, 9, 9));
        assert!(matches!(
            cal.adjust(&friday, Unknown),
            Err(Error::UnsupportedConvention(_))
        ));
    }

    #[test]
    fn adjust_keeps_time_of_day() {
        let cal = Calendar::from_impl(Unlucky);
        let d = date(2024, 9, 14).with_time(10, 30, 0, 0, 0).unwrap();
        let adjusted = cal.adjust(&d, BusinessDayConvention::Following).unwrap();
        assert_eq!(adjusted.date_only(), date(2024, 9, 16));
        assert_eq!(adjusted.hours(), 10);
    }

    #[test]
    fn modified_conventions_stay_in_month() {
        use BusinessDayConvention::*;
        let cal = Calendar::from_impl(Unlucky);
        // 2024-08-31 is a Saturday
        assert_eq!(cal.adjust(&date(2024, 8, 31), ModifiedFollowing).unwrap(), date(2024, 8, 30));
        // 2024-06-01 is a Saturday
        assert_eq!(cal.adjust(&date(2024, 6, 1), ModifiedPreceding).unwrap(), date(2024, 6, 3));
    }

    #[test]
    fn overlay_is_copy_on_write() {
        let cal = Calendar::from_impl(Unlucky);
        let d = date(2024, 9, 12);
        let with_holiday = cal.add_holiday(&d).unwrap();
        assert!(with_holiday.is_holiday(&d).unwrap());
        assert!(!cal.is_holiday(&d).unwrap());
        assert_eq!(with_holiday, cal);

        let restored = with_holiday.remove_holiday(&d).unwrap();
        assert!(restored.is_business_day(&d).unwrap());
        assert!(restored.added_holidays().is_empty());
        assert!(restored.removed_holidays().is_empty());

        let thirteenth = date(2024, 9, 13);
        let open = cal.remove_holiday(&thirteenth).unwrap();
        assert!(open.is_business_day(&thirteenth).unwrap());
        assert!(open.removed_holidays().contains(&thirteenth));
        // adding a rule holiday only cancels the removal
        let closed = open.add_holiday(&thirteenth).unwrap();
        assert!(closed.is_holiday(&thirteenth).unwrap());
        assert!(closed.added_holidays().is_empty());
    }

    #[test]
    fn advance_business_days() {
        let cal = Calendar::from_impl(Unlucky);
        let d = date(2024, 9, 12);
        let next = cal
            .advance(&d, 1, TimeUnit::Days, BusinessDayConvention::Following, false)
            .unwrap();
        assert_eq!(next, date(2024, 9, 16));
        let back = cal
            .advance(&next, -2, TimeUnit::Days, BusinessDayConvention::Following, false)
            .unwrap();
        assert_eq!(back, date(2024, 9, 11));
    }

    #[test]
    fn advance_months_end_of_month() {
        let cal = Calendar::from_impl(Unlucky);
        // 2024-05-31 is a Friday, the last business day of May
        let eom = date(2024, 5, 31);
        let p = Period::new(1, TimeUnit::Months);
        let d = cal
            .advance_by_period(&eom, p, BusinessDayConvention::Following, true)
            .unwrap();
        assert_eq!(d, date(2024, 6, 28));
        let d = cal
            .advance_by_period(&eom, p, BusinessDayConvention::Following, false)
            .unwrap();
        assert_eq!(d, date(2024, 7, 1));
    }

    #[test]
    fn counting_business_days() {
        let cal = Calendar::from_impl(Unlucky);
        // Mon 2024-09-09 .. Mon 2024-09-16: 9, 10, 11, 12, 16
        let from = date(2024, 9, 9);
        let to = date(2024, 9, 16);
        assert_eq!(cal.business_days_between(&from, &to, true, false).unwrap(), 4);
        assert_eq!(cal.business_days_between(&from, &to, true, true).unwrap(), 5);
        assert_eq!(cal.business_days_between(&from, &to, false, false).unwrap(), 3);
        assert_eq!(cal.business_days_between(&to, &from, true, false).unwrap(), -4);
        assert_eq!(cal.business_days_between(&from, &from, false, false).unwrap(), 0);
    }

    #[test]
    fn listing_holidays() {
        let cal = Calendar::from_impl(Unlucky);
        let from = date(2024, 9, 1);
        let to = date(2024, 9, 30);
        let weekdays_only = holiday_list(&cal, &from, &to, false).unwrap();
        assert_eq!(weekdays_only, vec![date(2024, 9, 13)]);
        let all = holiday_list(&cal, &from, &to, true).unwrap();
        assert_eq!(all.len(), 10);
        assert!(matches!(
            holiday_list(&cal, &to, &from, false),
            Err(Error::Precondition(_))
        ));
    }
}
