//! # range_picker
//!
//! The selection engine behind a calendar date-range picker: turns pointer
//! drag events into a normalized [`DateRange`] while steering clear of
//! disabled dates, and computes the fixed 42-day grid shown for a month.
//!
//! ```ignore
//! use range_picker::{CalendarDate, DisabledEntry, RangeSelector};
//!
//! let blocked: CalendarDate = "2024-03-12".parse()?;
//! let mut selector = RangeSelector::new(vec![DisabledEntry::SingleDate(blocked)])
//!     .with_observer(|selection| println!("{selection}"));
//!
//! selector.pointer_down("2024-03-10".parse()?);
//! selector.pointer_drag_over("2024-03-11".parse()?); // 2024-03-10/2024-03-11
//! selector.pointer_drag_over("2024-03-15".parse()?); // sweeps 03-12: cleared
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Day-granularity date value |
//! | `range` | Normalized inclusive date range |
//! | `interval` | Interval comparison with configurable inclusivity |
//! | `window` | The 42-day month grid |
//! | `disabled` | Disabled date / range collision checks |
//! | `selection` | Drag-gesture selection state machine |
//! | `calendar` | Month navigation and per-cell state for a host view |

mod calendar;
mod consts;
mod date;
mod disabled;
mod interval;
mod prelude;
mod range;
mod selection;
mod types;
mod window;

pub use calendar::{Calendar, CalendarConfig, CellVariant, DayCell};
pub use consts::*;
pub use date::CalendarDate;
pub use disabled::{Boundary, DisabledEntry, is_disabled, span_collides_with_disabled};
pub use interval::{Inclusivity, IntervalError, dates_between, is_between, is_between_str};
pub use range::{DateRange, RangeError};
pub use selection::{Phase, RangeSelector, Selection, SelectionObserver, SelectionState};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
pub use window::{ViewWindow, WindowError, compute_window};

use crate::prelude::*;

/// Errors raised while building or parsing calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            ParseError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay { month: 2, day: 30, year: 2024 }.to_string(),
            "Invalid day 30 for month 2024-02"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }

    #[test]
    fn test_parse_error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ParseError>();
        assert_impl::<RangeError>();
        assert_impl::<IntervalError>();
        assert_impl::<WindowError>();
    }

    #[test]
    fn test_window_constants() {
        assert_eq!(WINDOW_LEN, 42);
        assert_eq!(MAX_YEAR, 9999);
    }
}
