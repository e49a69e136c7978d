//! Pointer-drag range selection.
//!
//! A gesture starts with a pointer-down that fixes the *anchor*; every
//! drag-over then re-checks the whole candidate span against the disabled
//! entries, so a disabled date aborts the gesture the moment it is swept over
//! rather than on release.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Boundary, CalendarDate, DateRange, DisabledEntry, Inclusivity, is_between,
    span_collides_with_disabled,
};

/// Where the selector is in a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    AnchorSet,
    RangeSelected,
}

/// The selector's internal endpoints.
///
/// `far` is only ever set while `anchor` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionState {
    anchor: Option<CalendarDate>,
    far:    Option<CalendarDate>,
}

impl SelectionState {
    const EMPTY: Self = Self { anchor: None, far: None };

    const fn anchored(anchor: CalendarDate, far: Option<CalendarDate>) -> Self {
        Self { anchor: Some(anchor), far }
    }

    pub const fn anchor(&self) -> Option<CalendarDate> {
        self.anchor
    }

    pub const fn far(&self) -> Option<CalendarDate> {
        self.far
    }

    pub const fn phase(&self) -> Phase {
        match (self.anchor, self.far) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::AnchorSet,
            (Some(_), Some(_)) => Phase::RangeSelected,
        }
    }

    /// The ordered view handed to the host.
    pub fn snapshot(&self) -> Selection {
        match (self.anchor, self.far) {
            (Some(anchor), Some(far)) => Selection {
                start_date: Some(anchor.min(far)),
                end_date:   Some(anchor.max(far)),
            },
            (anchor, _) => Selection { start_date: anchor, end_date: None },
        }
    }
}

/// What the host sees of the selection: both ends, only a start, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub start_date: Option<CalendarDate>,
    pub end_date:   Option<CalendarDate>,
}

impl Selection {
    pub const fn is_empty(&self) -> bool {
        self.start_date.is_none()
    }

    /// The complete range, once both ends are known.
    pub fn range(&self) -> Option<DateRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => DateRange::new(start, end).ok(),
            _ => None,
        }
    }

    /// Whether `date` is highlighted; a lone start highlights just itself.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start_date.is_some_and(|start| {
            let end = self.end_date.unwrap_or(start);
            is_between(date, start, end, Inclusivity::Inclusive)
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => write!(f, "{start}/{end}"),
            (Some(start), None) => write!(f, "{start}/.."),
            _ => f.write_str("(none)"),
        }
    }
}

/// Receives a [`Selection`] each time the selector's endpoints change.
pub trait SelectionObserver {
    fn selection_changed(&mut self, selection: &Selection);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&Selection),
{
    fn selection_changed(&mut self, selection: &Selection) {
        self(selection);
    }
}

/// The drag-gesture state machine.
///
/// Each call runs to completion; events are expected in the order the
/// pointer produced them. Methods return the new [`Selection`] when the
/// endpoints changed, and `None` when the event was a no-op.
#[derive(Default)]
pub struct RangeSelector {
    state:    SelectionState,
    disabled: Vec<DisabledEntry>,
    observer: Option<Box<dyn SelectionObserver>>,
}

impl fmt::Debug for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelector")
            .field("state", &self.state)
            .field("disabled", &self.disabled)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl RangeSelector {
    pub fn new(disabled: Vec<DisabledEntry>) -> Self {
        Self { disabled, ..Self::default() }
    }

    /// Installs the change hook, replacing any previous one.
    #[must_use]
    pub fn with_observer(mut self, observer: impl SelectionObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl SelectionObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Replaces the disabled entries. The current selection is left as is.
    pub fn set_disabled(&mut self, disabled: Vec<DisabledEntry>) {
        self.disabled = disabled;
    }

    pub fn disabled(&self) -> &[DisabledEntry] {
        &self.disabled
    }

    pub const fn state(&self) -> SelectionState {
        self.state
    }

    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn selection(&self) -> Selection {
        self.state.snapshot()
    }

    /// Starts a gesture at `date`, or deselects when `date` is the current anchor.
    pub fn pointer_down(&mut self, date: CalendarDate) -> Option<Selection> {
        let next = match self.state.anchor {
            Some(anchor) if anchor == date => {
                debug!(%date, "pointer down on anchor, clearing selection");
                SelectionState::EMPTY
            },
            _ => SelectionState::anchored(date, None),
        };
        self.transition(next)
    }

    /// Extends the gesture to `date`.
    ///
    /// Dragging before the anchor pivots the selection: the new date becomes
    /// the anchor and the old anchor becomes the far end if none was set yet.
    /// Any collision with a disabled entry clears the whole selection.
    pub fn pointer_drag_over(&mut self, date: CalendarDate) -> Option<Selection> {
        let Some(anchor) = self.state.anchor else {
            trace!(%date, "drag over without an anchor, ignoring");
            return None;
        };
        if date == anchor {
            trace!(%date, "drag over the anchor, ignoring");
            return None;
        }

        let next = if date < anchor {
            if self.collides(date, anchor, Boundary::End) {
                SelectionState::EMPTY
            } else {
                SelectionState::anchored(date, Some(self.state.far.unwrap_or(anchor)))
            }
        } else if self.collides(anchor, date, Boundary::Start) {
            SelectionState::EMPTY
        } else {
            SelectionState::anchored(anchor, Some(date))
        };
        self.transition(next)
    }

    fn collides(&self, span_start: CalendarDate, span_end: CalendarDate, boundary: Boundary) -> bool {
        let collides = span_collides_with_disabled(span_start, span_end, &self.disabled, boundary);
        if collides {
            debug!(%span_start, %span_end, ?boundary, "span hits a disabled date, clearing selection");
        }
        collides
    }

    fn transition(&mut self, next: SelectionState) -> Option<Selection> {
        if next == self.state {
            return None;
        }
        self.state = next;

        let selection = next.snapshot();
        debug!(%selection, phase = ?next.phase(), "selection changed");
        if let Some(observer) = self.observer.as_mut() {
            observer.selection_changed(&selection);
        }
        Some(selection)
    }
}
