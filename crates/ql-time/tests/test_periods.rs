//! Integration tests for `Period` algebra, comparison and frequency mapping.

use std::cmp::Ordering;

use ql_core::Error;
use ql_time::{Frequency, Period, TimeUnit};

fn p(n: i32, unit: TimeUnit) -> Period {
    Period::new(n, unit)
}

#[test]
fn years_months_algebra() {
    let one_year = p(1, TimeUnit::Years);
    let six_months = p(6, TimeUnit::Months);
    let three_months = p(3, TimeUnit::Months);
    let twelve_months = p(12, TimeUnit::Months);

    assert_eq!(one_year.try_div(4).unwrap(), three_months);
    assert_eq!(one_year.try_div(2).unwrap(), six_months);

    let sum = three_months.try_add(six_months).unwrap();
    assert_eq!(sum, p(9, TimeUnit::Months));
    let sum = sum.try_add(one_year).unwrap();
    assert_eq!(sum.length(), 21);
    assert_eq!(sum.unit(), TimeUnit::Months);

    let normalized = twelve_months.normalized();
    assert_eq!((normalized.length(), normalized.unit()), (1, TimeUnit::Years));
    let fifteen = p(15, TimeUnit::Months).normalized();
    assert_eq!((fifteen.length(), fifteen.unit()), (15, TimeUnit::Months));
    assert_eq!(one_year, twelve_months);
}

#[test]
fn weeks_days_algebra() {
    let two_weeks = p(2, TimeUnit::Weeks);
    let one_week = p(1, TimeUnit::Weeks);
    let one_day = p(1, TimeUnit::Days);

    assert_eq!(two_weeks.try_div(2).unwrap(), one_week);
    assert_eq!(one_week.try_div(7).unwrap(), one_day);
    assert_eq!(p(3, TimeUnit::Days).try_add(one_day).unwrap(), p(4, TimeUnit::Days));

    let mixed = one_week.try_sub(p(2, TimeUnit::Days)).unwrap();
    assert_eq!((mixed.length(), mixed.unit()), (5, TimeUnit::Days));
    assert!(matches!(p(3, TimeUnit::Days).try_div(2), Err(Error::Precondition(_))));
    assert!(matches!(one_week.try_div(0), Err(Error::Precondition(_))));
}

#[test]
fn incompatible_units() {
    let one_year = p(1, TimeUnit::Years);
    let seconds = p(30, TimeUnit::Seconds);
    assert!(matches!(one_year.try_add(seconds), Err(Error::ImpossiblePeriodOperation(_))));
    assert!(matches!(one_year.try_sub(seconds), Err(Error::ImpossiblePeriodOperation(_))));
    assert!(matches!(
        p(1, TimeUnit::Months).try_add(p(1, TimeUnit::Days)),
        Err(Error::ImpossiblePeriodOperation(_))
    ));
    // a zero-length operand is always accepted
    assert_eq!(p(0, TimeUnit::Days).try_add(seconds).unwrap().unit(), TimeUnit::Seconds);
    assert!(matches!(p(2, TimeUnit::Weeks).years(), Err(Error::ImpossiblePeriodOperation(_))));
}

#[test]
fn unit_conversions() {
    assert_eq!(p(18, TimeUnit::Months).years().unwrap(), 1.5);
    assert_eq!(p(2, TimeUnit::Years).months().unwrap(), 24.0);
    assert_eq!(p(14, TimeUnit::Days).weeks().unwrap(), 2.0);
    assert_eq!(p(3, TimeUnit::Weeks).days().unwrap(), 21.0);
    assert_eq!(p(0, TimeUnit::Hours).days().unwrap(), 0.0);
}

#[test]
fn comparisons() {
    let cases = [
        (p(1, TimeUnit::Years), p(11, TimeUnit::Months), Ordering::Greater),
        (p(6, TimeUnit::Days), p(1, TimeUnit::Weeks), Ordering::Less),
        (p(1, TimeUnit::Months), p(27, TimeUnit::Days), Ordering::Greater),
        (p(1, TimeUnit::Months), p(5, TimeUnit::Weeks), Ordering::Less),
        (p(2, TimeUnit::Years), p(24, TimeUnit::Months), Ordering::Equal),
        (p(0, TimeUnit::Years), p(0, TimeUnit::Days), Ordering::Equal),
    ];
    for (a, b, expected) in cases {
        assert_eq!(a.try_cmp(&b).unwrap(), expected, "comparing {a} with {b}");
    }
    let month = p(1, TimeUnit::Months);
    let thirty_days = p(30, TimeUnit::Days);
    assert!(matches!(
        month.try_cmp(&thirty_days),
        Err(Error::UndecidableComparison(_))
    ));
    assert_eq!(month.partial_cmp(&thirty_days), None);
    assert!(month != thirty_days);
}

#[test]
fn frequencies() {
    let cases = [
        (Frequency::Annual, p(1, TimeUnit::Years)),
        (Frequency::Semiannual, p(6, TimeUnit::Months)),
        (Frequency::Quarterly, p(3, TimeUnit::Months)),
        (Frequency::Monthly, p(1, TimeUnit::Months)),
        (Frequency::Biweekly, p(2, TimeUnit::Weeks)),
        (Frequency::Daily, p(1, TimeUnit::Days)),
    ];
    for (freq, period) in cases {
        assert_eq!(Period::from_frequency(freq).unwrap(), period);
        assert_eq!(period.frequency().unwrap(), freq, "frequency of {period}");
    }
    assert_eq!(p(5, TimeUnit::Months).frequency().unwrap(), Frequency::OtherFrequency);
    assert_eq!(p(0, TimeUnit::Years).frequency().unwrap(), Frequency::Once);
    assert!(Period::from_frequency(Frequency::OtherFrequency).is_err());
}

#[test]
fn formatting() {
    assert_eq!(p(15, TimeUnit::Months).to_string(), "1Y3M");
    assert_eq!(p(9, TimeUnit::Days).to_string(), "1W2D");
    assert_eq!(p(3, TimeUnit::Months).to_string(), "3M");
    assert_eq!(p(15, TimeUnit::Months).long_string(), "1 year 3 months");
    assert_eq!(p(1, TimeUnit::Days).long_string(), "1 day");
    assert_eq!((-p(2, TimeUnit::Weeks)).length(), -2);
    assert_eq!((3 * TimeUnit::Months).length(), 3);
}
