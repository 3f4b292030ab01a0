//! Endpoint sweep over address ranges.
//!
//! Every range becomes two signed boundary events. Sorting the events and
//! keeping a running count recovers the covered addresses as a minimal,
//! sorted list of disjoint and non-adjacent ranges. Negating a group's signs
//! turns the same sweep into set difference.

use crate::models::AddressRange;
use itertools::Itertools;
use std::cmp::Ordering;

/// Whether a group of ranges adds to or removes from the coverage count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negated,
}

impl Polarity {
    fn deltas(self) -> (i8, i8) {
        match self {
            Polarity::Positive => (1, -1),
            Polarity::Negated => (-1, 1),
        }
    }
}

/// One signed boundary event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub(crate) addr: u64,
    /// `+1` or `-1`.
    pub(crate) delta: i8,
}

impl Ord for Endpoint {
    /// Ascending by address; at the same address `+1` sorts before `-1`, or a
    /// range ending where the next one starts would leave an empty gap.
    fn cmp(&self, other: &Self) -> Ordering {
        self.addr
            .cmp(&other.addr)
            .then_with(|| other.delta.cmp(&self.delta))
    }
}

impl PartialOrd for Endpoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Boundary events for `ranges` with the signs given by `polarity`.
pub(crate) fn endpoints(
    ranges: &[AddressRange],
    polarity: Polarity,
) -> impl Iterator<Item = Endpoint> + '_ {
    let (on_start, on_stop) = polarity.deltas();
    ranges.iter().flat_map(move |r| {
        [
            Endpoint {
                addr: r.start(),
                delta: on_start,
            },
            Endpoint {
                addr: r.stop(),
                delta: on_stop,
            },
        ]
    })
}

/// Collapse sorted endpoints into the ranges where the count is exactly one.
///
/// # Panics
/// If a range would close before it opens, or the count does not return to
/// zero after the last event. Both mean a malformed event list, which must
/// never yield a result.
pub(crate) fn endpoints_to_ranges(events: &[Endpoint]) -> Vec<AddressRange> {
    let mut count: i64 = 0;
    let mut start = 0;
    let mut ranges = Vec::new();

    for ep in events {
        let new_count = count + ep.delta as i64;
        if count == 0 && new_count == 1 {
            start = ep.addr;
        } else if count == 1 && new_count == 0 && start != ep.addr {
            assert!(
                start < ep.addr,
                "endpoint {} closes a range opened at {start}; events are not sorted",
                ep.addr
            );
            ranges.push(AddressRange::new(start, ep.addr));
        }
        count = new_count;
    }

    assert!(
        count == 0,
        "unclosed endpoints (count={count}) should never happen: {events:?}"
    );
    ranges
}

/// Sort the events of all `groups` together and sweep them.
pub fn sweep<'a, I>(groups: I) -> Vec<AddressRange>
where
    I: IntoIterator<Item = (&'a [AddressRange], Polarity)>,
{
    let events: Vec<Endpoint> = groups
        .into_iter()
        .flat_map(|(ranges, polarity)| endpoints(ranges, polarity))
        .sorted()
        .collect();
    let ranges = endpoints_to_ranges(&events);
    log::trace!(
        "sweep: {} endpoint(s) -> {} range(s)",
        events.len(),
        ranges.len()
    );
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: u64, stop: u64) -> AddressRange {
        AddressRange::new(start, stop)
    }

    fn bounds(ranges: &[AddressRange]) -> Vec<(u64, u64)> {
        ranges.iter().map(|r| (r.start(), r.stop())).collect()
    }

    #[test]
    fn test_endpoint_order_start_before_stop() {
        let stop = Endpoint { addr: 10, delta: -1 };
        let start = Endpoint { addr: 10, delta: 1 };
        let earlier = Endpoint { addr: 9, delta: -1 };
        let mut events = vec![stop, start, earlier];
        events.sort();
        assert_eq!(events, vec![earlier, start, stop]);
    }

    #[test]
    fn test_endpoints_negated() {
        let events: Vec<Endpoint> = endpoints(&[r(4, 8)], Polarity::Negated).collect();
        assert_eq!(
            events,
            vec![
                Endpoint { addr: 4, delta: -1 },
                Endpoint { addr: 8, delta: 1 }
            ]
        );
    }

    #[test]
    fn test_merge_adjacent() {
        let ranges = [r(0, 4), r(4, 8)];
        let merged = sweep([(&ranges[..], Polarity::Positive)]);
        assert_eq!(bounds(&merged), vec![(0, 8)]);
    }

    #[test]
    fn test_merge_overlapping_and_unordered() {
        let ranges = [r(20, 30), r(0, 10), r(5, 12), r(25, 40), r(50, 51)];
        let merged = sweep([(&ranges[..], Polarity::Positive)]);
        assert_eq!(bounds(&merged), vec![(0, 12), (20, 40), (50, 51)]);
    }

    #[test]
    fn test_merge_duplicates() {
        let ranges = [r(0, 10), r(0, 10), r(2, 3)];
        let merged = sweep([(&ranges[..], Polarity::Positive)]);
        assert_eq!(bounds(&merged), vec![(0, 10)]);
    }

    #[test]
    fn test_subtract_middle() {
        let a = [r(0, 100)];
        let b = [r(40, 60)];
        let diff = sweep([(&a[..], Polarity::Positive), (&b[..], Polarity::Negated)]);
        assert_eq!(bounds(&diff), vec![(0, 40), (60, 100)]);
    }

    #[test]
    fn test_subtract_overlapping_subtrahend() {
        let a = [r(0, 100)];
        let b = [r(10, 30), r(20, 40), r(90, 120)];
        let diff = sweep([(&a[..], Polarity::Positive), (&b[..], Polarity::Negated)]);
        assert_eq!(bounds(&diff), vec![(0, 10), (40, 90)]);
    }

    #[test]
    fn test_subtract_everything() {
        let a = [r(10, 20)];
        let b = [r(0, 50)];
        let diff = sweep([(&a[..], Polarity::Positive), (&b[..], Polarity::Negated)]);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_subtract_disjoint() {
        let a = [r(10, 20)];
        let b = [r(20, 30), r(0, 10)];
        let diff = sweep([(&a[..], Polarity::Positive), (&b[..], Polarity::Negated)]);
        assert_eq!(bounds(&diff), vec![(10, 20)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(endpoints_to_ranges(&[]).is_empty());
    }

    #[test]
    #[should_panic(expected = "events are not sorted")]
    fn test_unsorted_endpoints_panic() {
        endpoints_to_ranges(&[
            Endpoint { addr: 5, delta: 1 },
            Endpoint { addr: 3, delta: -1 },
        ]);
    }

    #[test]
    #[should_panic(expected = "unclosed endpoints")]
    fn test_unbalanced_endpoints_panic() {
        endpoints_to_ranges(&[Endpoint { addr: 1, delta: 1 }]);
    }
}
