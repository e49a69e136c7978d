//! The fixed grid of dates shown for one month.

use std::ops::Index;

use crate::{CalendarDate, DAYS_PER_WEEK, WINDOW_LEN, dates_between};

/// Error type for view window computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// The grid would run past the last representable date.
    #[error("View window for {0} extends past 9999-12-31")]
    OutOfRange(CalendarDate),
}

/// The 42 consecutive days (six Monday-first weeks) rendered for a month.
///
/// Always starts on the Monday on or before the first of the month, so the
/// grid keeps six rows no matter how many days the month has.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewWindow {
    days: Vec<CalendarDate>,
}

impl ViewWindow {
    pub fn first(&self) -> CalendarDate {
        self.days[0]
    }

    pub fn last(&self) -> CalendarDate {
        self.days[WINDOW_LEN - 1]
    }

    pub fn days(&self) -> &[CalendarDate] {
        &self.days
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.first() <= *date && *date <= self.last()
    }

    /// The window split into its six rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDate]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDate> {
        self.days.iter()
    }
}

impl Index<usize> for ViewWindow {
    type Output = CalendarDate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.days[index]
    }
}

impl<'a> IntoIterator for &'a ViewWindow {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Computes the view window for the month containing `target`.
///
/// Total for every month from January 0001 through November 9999. The only
/// failing input is December 9999: its grid would run into year 10000, past
/// `MAX_YEAR`.
///
/// # Errors
/// Returns `WindowError::OutOfRange` for a `target` in December 9999.
pub fn compute_window(target: CalendarDate) -> Result<ViewWindow, WindowError> {
    let first = target.first_of_month();
    let back = i64::from(first.weekday().days_from_monday());
    let out_of_range = || WindowError::OutOfRange(target);

    // 0001-01-01 is a Monday, so stepping back never leaves the calendar.
    let start = first.checked_add_days(-back).ok_or_else(out_of_range)?;
    let end = start
        .checked_add_days(WINDOW_LEN as i64 - 1)
        .ok_or_else(out_of_range)?;

    Ok(ViewWindow { days: dates_between(start, end) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weekday;
    use crate::test_utils::date;

    fn assert_well_formed(window: &ViewWindow) {
        assert_eq!(window.days().len(), WINDOW_LEN);
        assert_eq!(window.first().weekday(), Weekday::Monday);
        assert!(window.days().windows(2).all(|w| w[0].succ() == Some(w[1])));
    }

    #[test]
    fn test_march_2024() {
        let window = compute_window(date(2024, 3, 10)).unwrap();
        assert_well_formed(&window);
        assert_eq!(window.first(), date(2024, 2, 26));
        assert_eq!(window.last(), date(2024, 4, 7));
        assert!(window.contains(&date(2024, 3, 31)));
    }

    #[test]
    fn test_month_starting_on_monday_begins_on_first() {
        // April 2024 starts on a Monday.
        let window = compute_window(date(2024, 4, 30)).unwrap();
        assert_eq!(window.first(), date(2024, 4, 1));
        assert_eq!(window[41], date(2024, 5, 12));
    }

    #[test]
    fn test_month_starting_on_sunday_shows_previous_week() {
        // September 2024 starts on a Sunday.
        let window = compute_window(date(2024, 9, 1)).unwrap();
        assert_eq!(window.first(), date(2024, 8, 26));
        assert_eq!(window[6], date(2024, 9, 1));
    }

    #[test]
    fn test_every_month_of_a_year() {
        for month in 1..=12 {
            let target = date(2023, month, 15);
            let window = compute_window(target).unwrap();
            assert_well_formed(&window);
            assert!(window.contains(&target.first_of_month()));
            assert!(window.first() <= target.first_of_month());
        }
    }

    #[test]
    fn test_short_february_still_has_six_weeks() {
        // February 2021 starts on a Monday and has exactly four weeks.
        let window = compute_window(date(2021, 2, 1)).unwrap();
        assert_well_formed(&window);
        assert_eq!(window.weeks().count(), 6);
        assert_eq!(window.last(), date(2021, 3, 14));
    }

    #[test]
    fn test_calendar_edges() {
        let window = compute_window(date(1, 1, 1)).unwrap();
        assert_eq!(window.first(), date(1, 1, 1));

        assert!(compute_window(date(9999, 11, 30)).is_ok());
        assert_eq!(
            compute_window(date(9999, 12, 1)),
            Err(WindowError::OutOfRange(date(9999, 12, 1)))
        );
    }
}
