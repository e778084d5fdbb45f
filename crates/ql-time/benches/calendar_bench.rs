//! Benchmarks for calendar adjustment and day counting.
//!
//! Run with: cargo bench -p ql-time

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ql_time::{
    holiday_list, ActualActual, ActualActualConvention, Business252, BusinessDayConvention, Date,
    Target, TimeUnit, UnitedKingdom, UnitedStates,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn bench_adjust(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjust");
    let calendars = [
        ("TARGET", Target::new()),
        ("UK settlement", UnitedKingdom::settlement()),
        ("NYSE", UnitedStates::nyse()),
    ];
    // Boxing Day 2004 falls on a Sunday
    let d = date(2004, 12, 26);
    for (name, cal) in &calendars {
        group.bench_with_input(BenchmarkId::new("modified following", name), cal, |b, cal| {
            b.iter(|| cal.adjust(black_box(&d), BusinessDayConvention::ModifiedFollowing))
        });
    }
    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let cal = Target::new();
    let d = date(2024, 3, 28);
    c.bench_function("advance 10 business days", |b| {
        b.iter(|| {
            cal.advance(black_box(&d), 10, TimeUnit::Days, BusinessDayConvention::Following, false)
        })
    });
    c.bench_function("advance 6 months eom", |b| {
        b.iter(|| {
            cal.advance(black_box(&d), 6, TimeUnit::Months, BusinessDayConvention::Following, true)
        })
    });
}

fn bench_counting(c: &mut Criterion) {
    let cal = UnitedStates::settlement();
    let from = date(2000, 1, 1);
    let to = date(2030, 12, 31);
    c.bench_function("business days over 30 years", |b| {
        b.iter(|| cal.business_days_between(black_box(&from), black_box(&to), true, false))
    });
    c.bench_function("holiday list over 30 years", |b| {
        b.iter(|| holiday_list(&cal, black_box(&from), black_box(&to), false))
    });
}

fn bench_year_fraction(c: &mut Criterion) {
    let d1 = date(2002, 8, 15);
    let d2 = date(2033, 7, 15);
    let isda = ActualActual::new(ActualActualConvention::ISDA);
    let afb = ActualActual::new(ActualActualConvention::AFB);
    let bus252 = Business252::default();
    c.bench_function("act/act isda", |b| b.iter(|| isda.year_fraction(black_box(&d1), &d2)));
    c.bench_function("act/act afb", |b| b.iter(|| afb.year_fraction(black_box(&d1), &d2)));
    c.bench_function("business/252", |b| b.iter(|| bus252.year_fraction(black_box(&d1), &d2)));
}

criterion_group!(benches, bench_adjust, bench_advance, bench_counting, bench_year_fraction);
criterion_main!(benches);
