//! Date enumeration and interval membership with configurable endpoint inclusivity.

use std::str::FromStr;

use crate::CalendarDate;
use crate::prelude::*;

/// Which bounds of an interval count as part of it.
///
/// Written the mathematical way: `[` / `]` include the bound, `(` / `)`
/// exclude it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Inclusivity {
    /// `()`: neither bound
    #[default]
    #[display(fmt = "()")]
    Exclusive,
    /// `[]`: both bounds
    #[display(fmt = "[]")]
    Inclusive,
    /// `(]`: upper bound only
    #[display(fmt = "(]")]
    UpperInclusive,
    /// `[)`: lower bound only
    #[display(fmt = "[)")]
    LowerInclusive,
}

/// Error type for interval operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    #[error("Inclusivity must be one of (), [], (], [) but got {0:?}")]
    InvalidInclusivity(String),
}

impl Inclusivity {
    pub const fn includes_lower(self) -> bool {
        matches!(self, Self::Inclusive | Self::LowerInclusive)
    }

    pub const fn includes_upper(self) -> bool {
        matches!(self, Self::Inclusive | Self::UpperInclusive)
    }
}

impl FromStr for Inclusivity {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "()" => Ok(Self::Exclusive),
            "[]" => Ok(Self::Inclusive),
            "(]" => Ok(Self::UpperInclusive),
            "[)" => Ok(Self::LowerInclusive),
            other => Err(IntervalError::InvalidInclusivity(other.to_owned())),
        }
    }
}

/// Every calendar day from `start` through `end`, ascending.
///
/// Defined for `start <= end` only: when `start > end` the result is empty.
/// The endpoints are never swapped, so callers holding an unordered pair
/// must order it first.
pub fn dates_between(start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
    std::iter::successors(Some(start), CalendarDate::succ)
        .take_while(|day| *day <= end)
        .collect()
}

/// Tests `from ⋈ date ⋈ to` with each bound operator picked by `inclusivity`.
pub fn is_between(
    date: CalendarDate,
    from: CalendarDate,
    to: CalendarDate,
    inclusivity: Inclusivity,
) -> bool {
    let above_lower = if inclusivity.includes_lower() {
        from <= date
    } else {
        from < date
    };
    let below_upper = if inclusivity.includes_upper() {
        date <= to
    } else {
        date < to
    };
    above_lower && below_upper
}

/// [`is_between`] with the inclusivity given in its symbolic form.
///
/// # Errors
/// Returns `IntervalError::InvalidInclusivity` unless `symbol` is one of
/// `()`, `[]`, `(]`, `[)`.
pub fn is_between_str(
    date: CalendarDate,
    from: CalendarDate,
    to: CalendarDate,
    symbol: &str,
) -> Result<bool, IntervalError> {
    Ok(is_between(date, from, to, symbol.parse()?))
}
