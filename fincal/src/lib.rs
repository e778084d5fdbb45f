//! # fincal
//!
//! Dates, business-day calendars and day-count conventions for fixed-income
//! calculations.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ql-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! fincal = "0.1"
//! ```
//!
//! ```rust
//! use fincal::time::{
//!     ActualActual, ActualActualConvention, BusinessDayConvention, Date, Month, Target,
//!     TimeUnit,
//! };
//!
//! let target = Target::new();
//! // Good Friday 2024
//! let d = Date::new(29, Month::March, 2024)?;
//! assert!(target.is_holiday(&d)?);
//!
//! let settlement = target.advance(&d, 2, TimeUnit::Days, BusinessDayConvention::Following, false)?;
//! assert_eq!(settlement, Date::new(3, Month::April, 2024)?);
//!
//! let dc = ActualActual::new(ActualActualConvention::ISDA);
//! let yf = dc.year_fraction(&Date::new(1, Month::January, 2024)?, &Date::new(1, Month::July, 2024)?)?;
//! assert!((yf - 182.0 / 366.0).abs() < 1e-12);
//! # Ok::<(), fincal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use ql_core as core;

/// Dates, periods, calendars and day counters.
pub use ql_time as time;
