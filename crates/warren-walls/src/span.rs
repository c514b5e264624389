//! Half-open blocked runs and the generic run-length compressor.

use std::fmt;

/// A maximal blocked run `[begin, end)` along one grid line, in cell units.
///
/// Spans are never empty: `begin < end` always holds, and the deriving
/// code only ever produces spans inside the line's extent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First blocked position.
    pub begin: u32,
    /// One past the last blocked position.
    pub end: u32,
}

impl Span {
    /// Create a span covering `[begin, end)`.
    pub fn new(begin: u32, end: u32) -> Span {
        debug_assert!(begin < end, "span [{begin}, {end}) is empty");
        Span { begin, end }
    }

    /// Number of blocked positions covered.
    pub fn len(self) -> u32 {
        self.end - self.begin
    }

    /// Always returns `false`; spans cover at least one position.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Whether `position` falls inside the run.
    pub fn contains(self, position: u32) -> bool {
        self.begin <= position && position < self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({}..{})", self.begin, self.end)
    }
}

/// Compress `items` into the maximal runs where `blocked` holds.
///
/// Returns the runs in sequence order as half-open spans over the item
/// indices. Adjacent blocked positions merge into a single span, and runs
/// touching either end of the sequence close correctly. An input with no
/// blocked positions yields an empty vector.
///
/// # Examples
///
/// ```
/// use warren_walls::{runs_where, Span};
///
/// let cells = [true, true, false, true];
/// let runs = runs_where(cells, |&blocked| blocked);
/// assert_eq!(runs, vec![Span::new(0, 2), Span::new(3, 4)]);
/// ```
pub fn runs_where<I, P>(items: I, mut blocked: P) -> Vec<Span>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut spans = Vec::new();
    let mut open: Option<u32> = None;
    let mut position = 0u32;

    for item in items {
        if blocked(&item) {
            open.get_or_insert(position);
        } else if let Some(begin) = open.take() {
            spans.push(Span::new(begin, position));
        }
        position += 1;
    }
    if let Some(begin) = open {
        spans.push(Span::new(begin, position));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn runs(bits: &[bool]) -> Vec<Span> {
        runs_where(bits.iter().copied(), |&b| b)
    }

    // ── Span ────────────────────────────────────────────────────

    #[test]
    fn span_len_and_contains() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 3);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn span_debug_is_compact() {
        assert_eq!(format!("{:?}", Span::new(0, 4)), "Span(0..4)");
    }

    // ── Run compression ─────────────────────────────────────────

    #[test]
    fn empty_sequence_has_no_runs() {
        assert_eq!(runs(&[]), vec![]);
    }

    #[test]
    fn all_open_has_no_runs() {
        assert_eq!(runs(&[false, false, false]), vec![]);
    }

    #[test]
    fn all_blocked_is_one_full_run() {
        assert_eq!(runs(&[true, true, true]), vec![Span::new(0, 3)]);
    }

    #[test]
    fn adjacent_blocked_positions_merge() {
        assert_eq!(
            runs(&[false, true, true, true, false]),
            vec![Span::new(1, 4)]
        );
    }

    #[test]
    fn alternating_positions_stay_separate() {
        assert_eq!(
            runs(&[true, false, true, false, true]),
            vec![Span::new(0, 1), Span::new(2, 3), Span::new(4, 5)]
        );
    }

    #[test]
    fn run_touching_the_start_closes() {
        assert_eq!(runs(&[true, true, false]), vec![Span::new(0, 2)]);
    }

    #[test]
    fn run_touching_the_end_closes() {
        assert_eq!(runs(&[false, true, true]), vec![Span::new(1, 3)]);
    }

    #[test]
    fn single_position_sequences() {
        assert_eq!(runs(&[true]), vec![Span::new(0, 1)]);
        assert_eq!(runs(&[false]), vec![]);
    }

    #[test]
    fn predicate_sees_every_item() {
        let mut probed = Vec::new();
        runs_where([3, 1, 4, 1, 5], |&n| {
            probed.push(n);
            n > 2
        });
        assert_eq!(probed, vec![3, 1, 4, 1, 5]);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn runs_cover_exactly_the_blocked_positions(
            bits in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let spans = runs(&bits);
            for (position, &expected) in bits.iter().enumerate() {
                let covered = spans.iter().any(|s| s.contains(position as u32));
                prop_assert_eq!(covered, expected, "mismatch at position {}", position);
            }
        }

        #[test]
        fn runs_are_sorted_disjoint_and_maximal(
            bits in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let spans = runs(&bits);
            for span in &spans {
                prop_assert!(span.begin < span.end);
                prop_assert!(span.end <= bits.len() as u32);
            }
            for pair in spans.windows(2) {
                // Strictly separated: merging adjacent spans is the
                // compressor's job, so none may touch.
                prop_assert!(pair[0].end < pair[1].begin);
            }
        }
    }
}
