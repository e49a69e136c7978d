//! Host-facing calendar: month navigation, the visible grid and per-cell state
//! wired to a [`RangeSelector`].

use serde::Deserialize;
use tracing::{debug, trace};

use crate::{
    CalendarDate, DisabledEntry, RangeSelector, Selection, SelectionObserver, ViewWindow,
    WindowError, compute_window, is_disabled,
};

/// Startup settings for a [`Calendar`], typically deserialized from the host.
///
/// ```json
/// { "month": "2024-03-01", "disabled": ["2024-03-12", "2024-03-20/2024-03-22"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// Any date inside the month to show first.
    pub month:    CalendarDate,
    #[serde(default)]
    pub disabled: Vec<DisabledEntry>,
}

/// How a day cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellVariant {
    Default,
    Selected,
    Disabled,
}

/// Render state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub date:          CalendarDate,
    /// `false` for the leading/trailing days borrowed from adjacent months.
    pub in_view_month: bool,
    pub selected:      bool,
    pub disabled:      bool,
}

impl DayCell {
    /// Disabled takes precedence over selected.
    pub const fn variant(&self) -> CellVariant {
        if self.disabled {
            CellVariant::Disabled
        } else if self.selected {
            CellVariant::Selected
        } else {
            CellVariant::Default
        }
    }
}

/// One calendar instance: the displayed month, its window, and the selection.
#[derive(Debug)]
pub struct Calendar {
    month:    CalendarDate,
    window:   ViewWindow,
    selector: RangeSelector,
}

impl Calendar {
    /// Shows the month containing `month`, with nothing disabled.
    ///
    /// # Errors
    /// Returns `WindowError::OutOfRange` for December 9999.
    pub fn new(month: CalendarDate) -> Result<Self, WindowError> {
        let month = month.first_of_month();
        Ok(Self {
            month,
            window: compute_window(month)?,
            selector: RangeSelector::default(),
        })
    }

    /// # Errors
    /// Returns `WindowError::OutOfRange` for December 9999.
    pub fn from_config(config: CalendarConfig) -> Result<Self, WindowError> {
        let mut calendar = Self::new(config.month)?;
        calendar.set_disabled(config.disabled);
        Ok(calendar)
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl SelectionObserver + 'static) -> Self {
        self.selector.set_observer(observer);
        self
    }

    /// First day of the displayed month.
    pub const fn month(&self) -> CalendarDate {
        self.month
    }

    pub const fn window(&self) -> &ViewWindow {
        &self.window
    }

    pub const fn selector(&self) -> &RangeSelector {
        &self.selector
    }

    pub fn selection(&self) -> Selection {
        self.selector.selection()
    }

    pub fn disabled(&self) -> &[DisabledEntry] {
        self.selector.disabled()
    }

    pub fn set_disabled(&mut self, disabled: Vec<DisabledEntry>) {
        debug!(entries = disabled.len(), "disabled entries updated");
        self.selector.set_disabled(disabled);
    }

    /// Moves to the next month. On failure the view is left unchanged.
    ///
    /// # Errors
    /// Returns `WindowError::OutOfRange` when the next month can't be shown.
    pub fn show_next_month(&mut self) -> Result<(), WindowError> {
        self.shift_month(1)
    }

    /// Moves to the previous month. On failure the view is left unchanged.
    ///
    /// # Errors
    /// Returns `WindowError::OutOfRange` when the previous month can't be shown.
    pub fn show_previous_month(&mut self) -> Result<(), WindowError> {
        self.shift_month(-1)
    }

    fn shift_month(&mut self, months: i32) -> Result<(), WindowError> {
        let month = self
            .month
            .checked_add_months(months)
            .ok_or(WindowError::OutOfRange(self.month))?;
        self.window = compute_window(month)?;
        self.month = month;
        debug!(%month, "showing month");
        Ok(())
    }

    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        is_disabled(date, self.selector.disabled())
    }

    /// Render state for all 42 cells, in grid order.
    pub fn cells(&self) -> Vec<DayCell> {
        let selection = self.selection();
        self.window
            .iter()
            .map(|&date| DayCell {
                date,
                in_view_month: date.same_month(&self.month),
                selected: selection.contains(date),
                disabled: self.is_disabled(date),
            })
            .collect()
    }

    /// Pointer pressed on a cell. Disabled cells swallow the event.
    pub fn pointer_down(&mut self, date: CalendarDate) -> Option<Selection> {
        if self.is_disabled(date) {
            trace!(%date, "pointer down on disabled cell, ignoring");
            return None;
        }
        self.selector.pointer_down(date)
    }

    /// Pointer dragged onto a cell with the button held. Disabled cells swallow the event.
    pub fn pointer_drag_over(&mut self, date: CalendarDate) -> Option<Selection> {
        if self.is_disabled(date) {
            trace!(%date, "drag over disabled cell, ignoring");
            return None;
        }
        self.selector.pointer_drag_over(date)
    }
}
