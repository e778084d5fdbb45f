//! Concrete calendars.

mod australia;
mod brazil;
mod null_calendar;
mod target;
mod united_kingdom;
mod united_states;

pub use australia::Australia;
pub use brazil::Brazil;
pub use null_calendar::NullCalendar;
pub use target::Target;
pub use united_kingdom::UnitedKingdom;
pub use united_states::UnitedStates;
