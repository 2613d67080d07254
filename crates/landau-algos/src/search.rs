// Copyright (c) 2025 The Landau Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Searching
//!
//! The two classic membership searches, side by side: a linear scan that
//! inspects every element (O(n)) and a halving search over sorted slices
//! (O(log n)). Both return `Option<usize>`; callers that want the classic
//! `-1` sentinel convert through
//! [`SearchIndex`](landau_core::index::SearchIndex).
//!
//! The `_counted` variants tally one comparison per element probe, so the
//! gap between the two growth classes can be measured directly. The
//! halving search additionally offers a probe-trace variant that records
//! the sequence of inspected positions.

use landau_core::cost::CostTally;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Checks whether the given slice is sorted in non-decreasing order.
///
/// Returns `true` for empty and single-element slices.
#[inline(always)]
pub fn is_sorted_ascending<T>(seq: &[T]) -> bool
where
    T: Ord,
{
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Searches `seq` for `target` by inspecting elements from index 0 upward.
///
/// Returns the position of the first occurrence, or `None` if no element
/// equals `target`. The slice does not need to be sorted; every element
/// may be inspected, which is what makes this O(n).
///
/// # Examples
///
/// ```
/// use landau_algos::search::linear_search;
///
/// let haystack = [4, 2, 2, 8];
/// assert_eq!(linear_search(&haystack, &2), Some(1));
/// assert_eq!(linear_search(&haystack, &9), None);
/// ```
#[inline]
pub fn linear_search<T>(seq: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    for (index, value) in seq.iter().enumerate() {
        if value == target {
            return Some(index);
        }
    }
    None
}

/// Like [`linear_search`], but tallies one comparison per inspected
/// element.
///
/// A miss costs exactly `seq.len()` comparisons; a hit at position `i`
/// costs `i + 1`.
///
/// # Examples
///
/// ```
/// use landau_algos::search::linear_search_counted;
///
/// let haystack = [4, 2, 2, 8];
/// let (hit, tally) = linear_search_counted(&haystack, &9);
/// assert_eq!(hit, None);
/// assert_eq!(tally.comparisons, 4);
/// ```
pub fn linear_search_counted<T>(seq: &[T], target: &T) -> (Option<usize>, CostTally)
where
    T: PartialEq,
{
    let mut tally = CostTally::new();
    for (index, value) in seq.iter().enumerate() {
        tally.record_comparison();
        if value == target {
            return (Some(index), tally);
        }
    }
    (None, tally)
}

/// Searches a sorted slice for `target` by repeatedly halving the
/// candidate range.
///
/// Returns the position of a matching element, or `None` if no element
/// equals `target`. If `target` occurs more than once, the probe sequence
/// decides which occurrence is reported; no particular one is guaranteed.
///
/// The candidate range is kept half-open as `[lo, hi)` and shrinks by at
/// least half on every probe, which bounds the probe count by
/// `floor(log2(len)) + 1`.
///
/// # Panics
///
/// In debug builds, this function will panic if `seq` is not sorted in
/// non-decreasing order.
///
/// # Invariants
///
/// - `seq` must be sorted in non-decreasing order.
///
/// # Examples
///
/// ```
/// use landau_algos::search::binary_search;
///
/// let haystack = [1, 3, 5, 7, 9, 11];
/// assert_eq!(binary_search(&haystack, &7), Some(3));
/// assert_eq!(binary_search(&haystack, &4), None);
/// ```
pub fn binary_search<T>(seq: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    debug_assert!(
        is_sorted_ascending(seq),
        "called `binary_search` with a slice that is not sorted in non-decreasing order"
    );

    let mut lo: usize = 0;
    let mut hi: usize = seq.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        match seq[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Like [`binary_search`], but tallies one comparison per probe.
///
/// A probe inspects a single element, so for a slice of length `n` the
/// tally never exceeds `floor(log2 n) + 1` comparisons. A target smaller
/// than every element hits that bound exactly.
///
/// # Panics
///
/// In debug builds, this function will panic if `seq` is not sorted in
/// non-decreasing order.
///
/// # Examples
///
/// ```
/// use landau_algos::search::binary_search_counted;
///
/// let haystack = [1, 3, 5, 7, 9, 11];
/// let (hit, tally) = binary_search_counted(&haystack, &4);
/// assert_eq!(hit, None);
/// assert_eq!(tally.comparisons, 3); // floor(log2 6) + 1
/// ```
pub fn binary_search_counted<T>(seq: &[T], target: &T) -> (Option<usize>, CostTally)
where
    T: Ord,
{
    debug_assert!(
        is_sorted_ascending(seq),
        "called `binary_search_counted` with a slice that is not sorted in non-decreasing order"
    );

    let mut tally = CostTally::new();
    let mut lo: usize = 0;
    let mut hi: usize = seq.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        tally.record_comparison();
        match seq[mid].cmp(target) {
            Ordering::Equal => return (Some(mid), tally),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    (None, tally)
}

/// Like [`binary_search`], but records the position of every probe in
/// order.
///
/// The trace stays inline for up to 8 probes, which covers slices of up
/// to 255 elements; longer traces spill to the heap.
///
/// # Panics
///
/// In debug builds, this function will panic if `seq` is not sorted in
/// non-decreasing order.
///
/// # Examples
///
/// ```
/// use landau_algos::search::binary_search_trace;
///
/// let haystack = [1, 3, 5, 7, 9, 11];
/// let (hit, probes) = binary_search_trace(&haystack, &7);
/// assert_eq!(hit, Some(3));
/// assert_eq!(probes.as_slice(), &[3]);
/// ```
pub fn binary_search_trace<T>(seq: &[T], target: &T) -> (Option<usize>, SmallVec<[usize; 8]>)
where
    T: Ord,
{
    debug_assert!(
        is_sorted_ascending(seq),
        "called `binary_search_trace` with a slice that is not sorted in non-decreasing order"
    );

    let mut probes: SmallVec<[usize; 8]> = SmallVec::new();
    let mut lo: usize = 0;
    let mut hi: usize = seq.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        probes.push(mid);
        match seq[mid].cmp(target) {
            Ordering::Equal => return (Some(mid), probes),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    (None, probes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use landau_core::growth::GrowthClass;
    use landau_core::index::SearchIndex;

    #[test]
    fn test_is_sorted_ascending_true_empty() {
        let v: Vec<i64> = vec![];
        assert!(is_sorted_ascending(&v));
    }

    #[test]
    fn test_is_sorted_ascending_true_single() {
        assert!(is_sorted_ascending(&[42]));
    }

    #[test]
    fn test_is_sorted_ascending_true_with_duplicates() {
        assert!(is_sorted_ascending(&[1, 2, 2, 3]));
    }

    #[test]
    fn test_is_sorted_ascending_false_unsorted() {
        assert!(!is_sorted_ascending(&[3, 1, 2]));
    }

    #[test]
    fn linear_search_finds_first_occurrence() {
        let haystack = [4, 2, 2, 8];
        assert_eq!(linear_search(&haystack, &2), Some(1));
    }

    #[test]
    fn linear_search_misses_absent_target() {
        let haystack = [4, 2, 2, 8];
        assert_eq!(linear_search(&haystack, &9), None);
    }

    #[test]
    fn linear_search_on_empty_slice_misses() {
        let haystack: [i64; 0] = [];
        assert_eq!(linear_search(&haystack, &1), None);
    }

    #[test]
    fn linear_search_reaches_first_and_last_positions() {
        let haystack = [10, 20, 30, 40];
        assert_eq!(linear_search(&haystack, &10), Some(0));
        assert_eq!(linear_search(&haystack, &40), Some(3));
    }

    #[test]
    fn linear_search_works_on_unordered_non_integer_elements() {
        let haystack = ["pear", "apple", "plum"];
        assert_eq!(linear_search(&haystack, &"apple"), Some(1));
        assert_eq!(linear_search(&haystack, &"fig"), None);
    }

    #[test]
    fn linear_counted_miss_visits_every_element() {
        let haystack = [5, 4, 3, 2, 1];
        let (hit, tally) = linear_search_counted(&haystack, &0);

        assert_eq!(hit, None);
        assert_eq!(tally.comparisons, 5);
    }

    #[test]
    fn linear_counted_hit_stops_at_the_match() {
        let haystack = [4, 2, 2, 8];
        let (hit, tally) = linear_search_counted(&haystack, &2);

        assert_eq!(hit, Some(1));
        assert_eq!(tally.comparisons, 2);
    }

    #[test]
    fn linear_counted_agrees_with_uncounted() {
        let haystack = [9, 8, 7, 6];
        for target in 0..12 {
            let (hit, _) = linear_search_counted(&haystack, &target);
            assert_eq!(hit, linear_search(&haystack, &target));
        }
    }

    #[test]
    fn linear_counted_stays_within_linear_prediction() {
        let haystack: Vec<u64> = (0..100).collect();
        let (_, tally) = linear_search_counted(&haystack, &1000);

        let bound = GrowthClass::Linear.predicted_ops(haystack.len() as u64);
        assert_eq!(tally.comparisons, bound);
    }

    #[test]
    fn binary_search_finds_present_target() {
        let haystack = [1, 3, 5, 7, 9, 11];
        assert_eq!(binary_search(&haystack, &7), Some(3));
    }

    #[test]
    fn binary_search_misses_absent_target() {
        let haystack = [1, 3, 5, 7, 9, 11];
        assert_eq!(binary_search(&haystack, &4), None);
    }

    #[test]
    fn binary_search_on_empty_slice_misses() {
        let haystack: [i64; 0] = [];
        assert_eq!(binary_search(&haystack, &1), None);
    }

    #[test]
    fn binary_search_on_single_element_slice() {
        assert_eq!(binary_search(&[7], &7), Some(0));
        assert_eq!(binary_search(&[7], &3), None);
        assert_eq!(binary_search(&[7], &9), None);
    }

    #[test]
    fn binary_search_reaches_first_and_last_positions() {
        let haystack = [2, 4, 6, 8, 10];
        assert_eq!(binary_search(&haystack, &2), Some(0));
        assert_eq!(binary_search(&haystack, &10), Some(4));
    }

    #[test]
    fn binary_search_finds_every_position_in_a_long_slice() {
        let haystack: Vec<u64> = (0..1000).collect();
        for (position, value) in haystack.iter().enumerate() {
            assert_eq!(binary_search(&haystack, value), Some(position));
        }
    }

    #[test]
    fn binary_search_misses_every_gap_in_a_sparse_slice() {
        let haystack: Vec<u64> = (0..500).map(|v| v * 2).collect();
        for absent in haystack.iter().map(|v| v + 1) {
            assert_eq!(binary_search(&haystack, &absent), None);
        }
    }

    #[test]
    fn binary_search_reports_some_occurrence_of_a_duplicate() {
        let haystack = [1, 2, 2, 2, 3];
        let hit = binary_search(&haystack, &2);

        let position = hit.unwrap();
        assert_eq!(haystack[position], 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not sorted in non-decreasing order")]
    fn binary_search_panics_on_unsorted_input() {
        let _ = binary_search(&[3, 1, 2], &2);
    }

    #[test]
    fn binary_counted_hits_the_halving_bound_exactly() {
        for len in [1u64, 2, 3, 6, 7, 64, 100, 1000] {
            let haystack: Vec<u64> = (1..=len).collect();
            // A target below every element forces the longest probe path.
            let (hit, tally) = binary_search_counted(&haystack, &0);

            assert_eq!(hit, None);
            assert_eq!(
                tally.comparisons,
                GrowthClass::Logarithmic.predicted_ops(len),
                "wrong probe count for length {}",
                len
            );
        }
    }

    #[test]
    fn binary_counted_agrees_with_uncounted() {
        let haystack: Vec<i64> = (0..64).map(|v| v * 3).collect();
        for target in -1..200 {
            let (hit, _) = binary_search_counted(&haystack, &target);
            assert_eq!(hit, binary_search(&haystack, &target));
        }
    }

    #[test]
    fn trace_records_probes_in_order() {
        let haystack = [1, 3, 5, 7, 9, 11];

        let (hit, probes) = binary_search_trace(&haystack, &7);
        assert_eq!(hit, Some(3));
        assert_eq!(probes.as_slice(), &[3]);

        let (hit, probes) = binary_search_trace(&haystack, &4);
        assert_eq!(hit, None);
        assert_eq!(probes.as_slice(), &[3, 1, 2]);

        let (hit, probes) = binary_search_trace(&haystack, &11);
        assert_eq!(hit, Some(5));
        assert_eq!(probes.as_slice(), &[3, 5]);
    }

    #[test]
    fn trace_length_matches_counted_comparisons() {
        let haystack: Vec<u64> = (0..128).collect();
        for target in [0u64, 17, 63, 64, 127, 500] {
            let (_, probes) = binary_search_trace(&haystack, &target);
            let (_, tally) = binary_search_counted(&haystack, &target);
            assert_eq!(probes.len() as u64, tally.comparisons);
        }
    }

    #[test]
    fn hits_and_misses_encode_as_classic_sentinels() {
        let sorted = [1, 3, 5, 7, 9, 11];
        let hit = SearchIndex::<i64>::from_option(binary_search(&sorted, &7));
        let miss = SearchIndex::<i64>::from_option(binary_search(&sorted, &4));

        assert_eq!(hit.raw(), 3);
        assert_eq!(miss.raw(), -1);

        let unsorted = [4, 2, 2, 8];
        let hit = SearchIndex::<i64>::from_option(linear_search(&unsorted, &2));
        let miss = SearchIndex::<i64>::from_option(linear_search(&unsorted, &9));

        assert_eq!(hit.raw(), 1);
        assert_eq!(miss.raw(), -1);
    }
}
