//! Collision checks between dates and a host-supplied set of disabled entries.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateRange, Inclusivity, is_between};

/// A date, or an inclusive run of dates, that can't be selected.
///
/// Serialized untagged: a single date as `"YYYY-MM-DD"`, a range as
/// `"YYYY-MM-DD/YYYY-MM-DD"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisabledEntry {
    SingleDate(CalendarDate),
    RangeEntry(DateRange),
}

impl From<CalendarDate> for DisabledEntry {
    fn from(date: CalendarDate) -> Self {
        Self::SingleDate(date)
    }
}

impl From<DateRange> for DisabledEntry {
    fn from(range: DateRange) -> Self {
        Self::RangeEntry(range)
    }
}

/// Which edge of a disabled range blocks a span sweeping over it.
///
/// A forward drag can only run into a disabled range through its start, and
/// a backward drag through its end, so only that edge is checked. A selection
/// may therefore stop right at the near edge of a disabled range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Dragging forward: the disabled range's start is the blocking edge.
    Start,
    /// Dragging backward: the disabled range's end is the blocking edge.
    End,
}

impl Boundary {
    pub const fn of(self, range: &DateRange) -> CalendarDate {
        match self {
            Self::Start => range.start(),
            Self::End => range.end(),
        }
    }
}

impl DisabledEntry {
    /// Whether `date` itself is disabled by this entry.
    pub fn covers(&self, date: CalendarDate) -> bool {
        match self {
            Self::SingleDate(disabled) => *disabled == date,
            Self::RangeEntry(range) => {
                is_between(date, range.start(), range.end(), Inclusivity::Inclusive)
            },
        }
    }

    /// Whether a drag spanning `span_start..=span_end` runs into this entry.
    ///
    /// Single dates only collide in the span's interior; a range collides when
    /// its `boundary` edge lies anywhere in the span, endpoints included.
    pub fn blocks_span(
        &self,
        span_start: CalendarDate,
        span_end: CalendarDate,
        boundary: Boundary,
    ) -> bool {
        match self {
            Self::SingleDate(disabled) => {
                is_between(*disabled, span_start, span_end, Inclusivity::Exclusive)
            },
            Self::RangeEntry(range) => is_between(
                boundary.of(range),
                span_start,
                span_end,
                Inclusivity::Inclusive,
            ),
        }
    }
}

/// True if `date` matches a disabled single date or falls inside a disabled range.
pub fn is_disabled(date: CalendarDate, entries: &[DisabledEntry]) -> bool {
    entries.iter().any(|entry| entry.covers(date))
}

/// True if any entry blocks the span `span_start..=span_end` (see [`DisabledEntry::blocks_span`]).
pub fn span_collides_with_disabled(
    span_start: CalendarDate,
    span_end: CalendarDate,
    entries: &[DisabledEntry],
    boundary: Boundary,
) -> bool {
    entries
        .iter()
        .any(|entry| entry.blocks_span(span_start, span_end, boundary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{blocked, date, single};

    #[test]
    fn test_is_disabled() {
        let entries = [
            single(2024, 3, 12),
            blocked(date(2024, 3, 20), date(2024, 3, 22)),
        ];

        assert!(is_disabled(date(2024, 3, 12), &entries));
        assert!(is_disabled(date(2024, 3, 20), &entries));
        assert!(is_disabled(date(2024, 3, 21), &entries));
        assert!(is_disabled(date(2024, 3, 22), &entries));
        assert!(!is_disabled(date(2024, 3, 11), &entries));
        assert!(!is_disabled(date(2024, 3, 23), &entries));
        assert!(!is_disabled(date(2024, 3, 12), &[]));
    }

    #[test]
    fn test_single_date_collides_only_in_interior() {
        let entries = [single(2024, 3, 12)];
        let boundaries = [Boundary::Start, Boundary::End];

        for boundary in boundaries {
            assert!(span_collides_with_disabled(date(2024, 3, 10), date(2024, 3, 15), &entries, boundary));
            assert!(!span_collides_with_disabled(date(2024, 3, 12), date(2024, 3, 15), &entries, boundary));
            assert!(!span_collides_with_disabled(date(2024, 3, 10), date(2024, 3, 12), &entries, boundary));
            assert!(!span_collides_with_disabled(date(2024, 3, 13), date(2024, 3, 15), &entries, boundary));
        }
    }

    #[test]
    fn test_range_collides_through_chosen_boundary() {
        struct TestCase {
            span:        (CalendarDate, CalendarDate),
            boundary:    Boundary,
            collides:    bool,
            description: &'static str,
        }

        let entries = [blocked(date(2024, 3, 12), date(2024, 3, 14))];
        let cases = [
            TestCase {
                span:        (date(2024, 3, 10), date(2024, 3, 16)),
                boundary:    Boundary::Start,
                collides:    true,
                description: "forward sweep over the whole range",
            },
            TestCase {
                span:        (date(2024, 3, 10), date(2024, 3, 12)),
                boundary:    Boundary::Start,
                collides:    true,
                description: "forward span ending on the start edge",
            },
            TestCase {
                span:        (date(2024, 3, 10), date(2024, 3, 11)),
                boundary:    Boundary::Start,
                collides:    false,
                description: "forward span stopping just short",
            },
            TestCase {
                span:        (date(2024, 3, 13), date(2024, 3, 20)),
                boundary:    Boundary::Start,
                collides:    false,
                description: "forward span from inside, start edge behind",
            },
            TestCase {
                span:        (date(2024, 3, 10), date(2024, 3, 13)),
                boundary:    Boundary::End,
                collides:    false,
                description: "end edge lies past the span",
            },
            TestCase {
                span:        (date(2024, 3, 14), date(2024, 3, 20)),
                boundary:    Boundary::End,
                collides:    true,
                description: "backward span starting on the end edge",
            },
            TestCase {
                span:        (date(2024, 3, 15), date(2024, 3, 20)),
                boundary:    Boundary::End,
                collides:    false,
                description: "backward span stopping just short",
            },
        ];

        for case in &cases {
            let (start, end) = case.span;
            assert_eq!(
                span_collides_with_disabled(start, end, &entries, case.boundary),
                case.collides,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_boundary_of() {
        let range = crate::test_utils::range(date(2024, 3, 12), date(2024, 3, 14));
        assert_eq!(Boundary::Start.of(&range), date(2024, 3, 12));
        assert_eq!(Boundary::End.of(&range), date(2024, 3, 14));
    }

    #[test]
    fn test_serde_untagged() {
        let json = r#"["2024-03-12", "2024-03-20/2024-03-22"]"#;
        let entries: Vec<DisabledEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(
            entries,
            vec![single(2024, 3, 12), blocked(date(2024, 3, 20), date(2024, 3, 22))]
        );
        assert_eq!(
            serde_json::to_string(&entries).unwrap(),
            r#"["2024-03-12","2024-03-20/2024-03-22"]"#
        );

        let bad: Result<Vec<DisabledEntry>, _> = serde_json::from_str(r#"["2024-03-22/2024-03-20"]"#);
        assert!(bad.is_err());
    }
}
