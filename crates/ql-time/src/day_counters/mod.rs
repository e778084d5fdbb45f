//! Built-in day-count conventions.

mod actual360;
mod actual365_fixed;
mod actual365_no_leap;
mod actual_actual;
mod business252;
mod one;
mod simple;
mod thirty360;

pub use actual360::Actual360;
pub use actual365_fixed::Actual365Fixed;
pub use actual365_no_leap::Actual365NoLeap;
pub use actual_actual::{ActualActual, ActualActualConvention};
pub use business252::Business252;
pub use one::OneDayCounter;
pub use simple::SimpleDayCounter;
pub use thirty360::{Thirty360, Thirty360Convention};
