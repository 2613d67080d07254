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

//! # Sorting
//!
//! Merge sort in its textbook divide-and-conquer form: split in half,
//! sort each half, merge. The halving recursion is `log2 n` levels deep
//! and every level moves all `n` elements once, which is where the
//! O(n log n) comes from.
//!
//! The sort is out-of-place and stable. Equal elements keep their input
//! order because the merge takes from the left half on ties.

use landau_core::cost::CostTally;

/// Sorts a slice into a new `Vec` using merge sort.
///
/// The input is left untouched; the result is a freshly allocated sorted
/// copy. The sort is stable: elements that compare equal keep their
/// relative input order.
///
/// # Examples
///
/// ```
/// use landau_algos::sort::merge_sort;
///
/// assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
/// assert_eq!(merge_sort::<i32>(&[]), vec![]);
/// ```
pub fn merge_sort<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }

    let mid = seq.len() / 2;
    let left = merge_sort(&seq[..mid]);
    let right = merge_sort(&seq[mid..]);
    merge(&left, &right)
}

/// Like [`merge_sort`], but tallies the work done.
///
/// Comparisons counts element-to-element comparisons made while merging;
/// moves counts elements appended to merge outputs. For a slice of
/// length `n`, moves is exactly `n` per recursion level and comparisons
/// never exceeds `n * (floor(log2 n) + 1)`.
///
/// # Examples
///
/// ```
/// use landau_algos::sort::merge_sort_counted;
///
/// let (sorted, tally) = merge_sort_counted(&[3, 1, 2]);
/// assert_eq!(sorted, vec![1, 2, 3]);
/// assert!(tally.comparisons >= 2);
/// assert!(tally.moves >= 5);
/// ```
pub fn merge_sort_counted<T>(seq: &[T]) -> (Vec<T>, CostTally)
where
    T: Ord + Clone,
{
    let mut tally = CostTally::new();
    let sorted = sort_counted(seq, &mut tally);
    (sorted, tally)
}

fn sort_counted<T>(seq: &[T], tally: &mut CostTally) -> Vec<T>
where
    T: Ord + Clone,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }

    let mid = seq.len() / 2;
    let left = sort_counted(&seq[..mid], tally);
    let right = sort_counted(&seq[mid..], tally);
    merge_counted(&left, &right, tally)
}

/// Merges two sorted slices into one sorted `Vec`, taking from `left` on
/// ties.
fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

fn merge_counted<T>(left: &[T], right: &[T], tally: &mut CostTally) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        tally.record_comparison();
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
        tally.record_move();
    }

    for value in &left[i..] {
        merged.push(value.clone());
        tally.record_move();
    }
    for value in &right[j..] {
        merged.push(value.clone());
        tally.record_move();
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use landau_core::growth::GrowthClass;
    use std::cmp::Ordering;

    /// Deterministic scramble of `0..len`; a permutation whenever
    /// `gcd(131, len) == 1`.
    fn scrambled(len: usize) -> Vec<usize> {
        (0..len).map(|i| (i * 131) % len.max(1)).collect()
    }

    #[test]
    fn sorts_an_unordered_slice() {
        assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
    }

    #[test]
    fn empty_and_single_inputs_pass_through() {
        assert_eq!(merge_sort::<i64>(&[]), Vec::<i64>::new());
        assert_eq!(merge_sort(&[9]), vec![9]);
    }

    #[test]
    fn sorted_input_is_unchanged() {
        let seq = [1, 2, 3, 4, 5];
        assert_eq!(merge_sort(&seq), seq.to_vec());
    }

    #[test]
    fn reversed_input_is_sorted() {
        let seq: Vec<i64> = (0..64).rev().collect();
        let expected: Vec<i64> = (0..64).collect();
        assert_eq!(merge_sort(&seq), expected);
    }

    #[test]
    fn duplicates_are_all_kept() {
        assert_eq!(merge_sort(&[5, 1, 5, 0, 5]), vec![0, 1, 5, 5, 5]);
    }

    #[test]
    fn agrees_with_std_sort_on_a_scrambled_slice() {
        let seq = scrambled(100);
        let mut expected = seq.clone();
        expected.sort();

        assert_eq!(merge_sort(&seq), expected);
    }

    #[test]
    fn non_copy_elements_sort_correctly() {
        let seq = vec![
            String::from("banana"),
            String::from("apple"),
            String::from("cherry"),
        ];

        let sorted = merge_sort(&seq);

        assert_eq!(sorted, vec!["apple", "banana", "cherry"]);
        // Input untouched.
        assert_eq!(seq[0], "banana");
    }

    /// Ordered by `key` alone; `seq` records the input position so
    /// stability can be observed.
    #[derive(Debug, Clone)]
    struct Keyed {
        key: u32,
        seq: u32,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn equal_keys_keep_their_input_order() {
        let seq = vec![
            Keyed { key: 2, seq: 0 },
            Keyed { key: 1, seq: 1 },
            Keyed { key: 2, seq: 2 },
            Keyed { key: 1, seq: 3 },
            Keyed { key: 2, seq: 4 },
        ];

        let sorted = merge_sort(&seq);

        let ones: Vec<u32> = sorted.iter().filter(|k| k.key == 1).map(|k| k.seq).collect();
        let twos: Vec<u32> = sorted.iter().filter(|k| k.key == 2).map(|k| k.seq).collect();

        assert_eq!(ones, vec![1, 3]);
        assert_eq!(twos, vec![0, 2, 4]);
    }

    #[test]
    fn counted_agrees_with_uncounted() {
        let seq = scrambled(73);
        let (sorted, _) = merge_sort_counted(&seq);

        assert_eq!(sorted, merge_sort(&seq));
    }

    #[test]
    fn counted_comparisons_stay_within_linearithmic_prediction() {
        for len in [2usize, 8, 100, 256] {
            let seq = scrambled(len);
            let (_, tally) = merge_sort_counted(&seq);

            let bound = GrowthClass::Linearithmic.predicted_ops(len as u64);
            assert!(
                tally.comparisons <= bound,
                "length {}: {} comparisons exceed bound {}",
                len,
                tally.comparisons,
                bound
            );
        }
    }

    #[test]
    fn moves_are_input_size_times_levels_for_power_of_two() {
        // 8 elements, 3 merge levels, 8 moves per level.
        let (_, tally) = merge_sort_counted(&scrambled(8));
        assert_eq!(tally.moves, 24);
    }

    #[test]
    fn sorted_input_needs_minimum_comparisons() {
        // Every merge of already ordered halves exhausts the left half
        // after comparing each of its elements once: 4 + 4 + 4.
        let seq: Vec<u64> = (0..8).collect();
        let (_, tally) = merge_sort_counted(&seq);

        assert_eq!(tally.comparisons, 12);
    }
}
