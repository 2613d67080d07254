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

//! # Recurrences
//!
//! The Fibonacci recurrence `F(n) = F(n-1) + F(n-2)` with `F(0) = 0` and
//! `F(1) = 1`, implemented four ways.
//!
//! [`fibonacci`] is deliberately the naive doubly recursive form. Its
//! call tree is the O(2^n) exhibit of this collection, so it must not be
//! "fixed"; [`fibonacci_iterative`] and [`MemoizedFibonacci`] sit next to
//! it to show what the fix looks like, and [`try_fibonacci`] adds
//! overflow checking without changing the shape of the recursion.
//!
//! Indices are `u64`, so the question of negative input does not arise.
//! `u64` holds Fibonacci numbers up to index [`MAX_INDEX_FOR_U64`]; the
//! fast variants debug-assert that limit, while the naive form runs out
//! of patience long before it runs out of range.

use landau_core::cost::CostTally;
use num_traits::{CheckedAdd, PrimInt};
use rustc_hash::FxHashMap;

/// The largest index whose Fibonacci number fits in a `u64`.
///
/// `F(93) = 12_200_160_415_121_876_738`; `F(94)` overflows.
pub const MAX_INDEX_FOR_U64: u64 = 93;

/// Computes the `n`-th Fibonacci number by naive double recursion.
///
/// Each call for `n >= 2` spawns two more calls, so the call count is
/// exactly `2 * F(n+1) - 1` and the running time is O(2^n). The
/// recursion depth is O(n). This is intentional: the function exists to
/// demonstrate exponential growth, not to compute large Fibonacci
/// numbers. Use [`fibonacci_iterative`] or [`MemoizedFibonacci`] for
/// that.
///
/// # Examples
///
/// ```
/// use landau_algos::recurrence::fibonacci;
///
/// assert_eq!(fibonacci(0), 0);
/// assert_eq!(fibonacci(1), 1);
/// assert_eq!(fibonacci(7), 13);
/// ```
pub fn fibonacci(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

/// Like [`fibonacci`], but tallies every call.
///
/// # Examples
///
/// ```
/// use landau_algos::recurrence::fibonacci_counted;
///
/// let (value, tally) = fibonacci_counted(7);
/// assert_eq!(value, 13);
/// assert_eq!(tally.calls, 41); // 2 * F(8) - 1
/// ```
pub fn fibonacci_counted(n: u64) -> (u64, CostTally) {
    let mut tally = CostTally::new();
    let value = count_calls(n, &mut tally);
    (value, tally)
}

fn count_calls(n: u64, tally: &mut CostTally) -> u64 {
    tally.record_call();
    if n <= 1 {
        return n;
    }
    count_calls(n - 1, tally) + count_calls(n - 2, tally)
}

/// Computes the `n`-th Fibonacci number in the naive recursive shape,
/// returning `None` instead of overflowing the target type.
///
/// The recursion is the same doubly recursive tree as [`fibonacci`], so
/// the exponential running time carries over; only the addition is
/// checked. Useful for watching exactly where a narrow integer type runs
/// out of room.
///
/// # Examples
///
/// ```
/// use landau_algos::recurrence::try_fibonacci;
///
/// // F(13) = 233 still fits in a u8, F(14) = 377 does not.
/// assert_eq!(try_fibonacci::<u8>(13), Some(233));
/// assert_eq!(try_fibonacci::<u8>(14), None);
/// ```
pub fn try_fibonacci<T>(n: u64) -> Option<T>
where
    T: PrimInt + CheckedAdd,
{
    if n == 0 {
        return Some(T::zero());
    }
    if n == 1 {
        return Some(T::one());
    }
    let a = try_fibonacci::<T>(n - 1)?;
    let b = try_fibonacci::<T>(n - 2)?;
    a.checked_add(&b)
}

/// Computes the `n`-th Fibonacci number in O(n) by running the
/// recurrence forward.
///
/// This is the contrast to [`fibonacci`]: same recurrence, one pass, no
/// recursion.
///
/// # Panics
///
/// In debug builds, this function will panic if `n` exceeds
/// [`MAX_INDEX_FOR_U64`].
///
/// # Examples
///
/// ```
/// use landau_algos::recurrence::fibonacci_iterative;
///
/// assert_eq!(fibonacci_iterative(10), 55);
/// assert_eq!(fibonacci_iterative(90), 2_880_067_194_370_816_120);
/// ```
pub fn fibonacci_iterative(n: u64) -> u64 {
    debug_assert!(
        n <= MAX_INDEX_FOR_U64,
        "called `fibonacci_iterative` with an index beyond the largest u64 Fibonacci index: {}",
        n
    );

    if n == 0 {
        return 0;
    }

    // The pair walks to (F(n-1), F(n)); the largest sum formed is F(n)
    // itself, so the computation stays in u64 range through n = 93.
    let mut previous: u64 = 0;
    let mut current: u64 = 1;
    for _ in 1..n {
        let next = previous + current;
        previous = current;
        current = next;
    }
    current
}

/// Fibonacci with a memo table: the naive recursion shape, minus the
/// repeated work.
///
/// Each index is computed once and cached, so a fresh computation of
/// `F(n)` makes O(n) calls instead of O(2^n), and repeat queries are
/// lookups. The cache persists across calls and can be reused or
/// cleared.
///
/// # Examples
///
/// ```
/// use landau_algos::recurrence::MemoizedFibonacci;
///
/// let mut memo = MemoizedFibonacci::new();
/// assert_eq!(memo.compute(90), 2_880_067_194_370_816_120);
/// assert_eq!(memo.compute(7), 13); // already cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoizedFibonacci {
    cache: FxHashMap<u64, u64>,
}

impl MemoizedFibonacci {
    /// Creates a memoizer with an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self {
            cache: FxHashMap::default(),
        }
    }

    /// Creates a memoizer with cache capacity for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Computes the `n`-th Fibonacci number, reusing cached results.
    ///
    /// # Panics
    ///
    /// In debug builds, this method will panic if `n` exceeds
    /// [`MAX_INDEX_FOR_U64`].
    pub fn compute(&mut self, n: u64) -> u64 {
        debug_assert!(
            n <= MAX_INDEX_FOR_U64,
            "called `MemoizedFibonacci::compute` with an index beyond the largest u64 Fibonacci index: {}",
            n
        );

        if n <= 1 {
            return n;
        }
        if let Some(&value) = self.cache.get(&n) {
            return value;
        }

        let value = self.compute(n - 1) + self.compute(n - 2);
        self.cache.insert(n, value);
        value
    }

    /// Returns the number of cached indices.
    ///
    /// Base cases are never cached, so after computing `F(n)` from a
    /// cold cache this is `n - 1` for `n >= 2`.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drops all cached results.
    #[inline]
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landau_core::growth::GrowthClass;
    use landau_core::report::GrowthReport;

    #[test]
    fn base_cases_are_zero_and_one() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(2), 1);
    }

    #[test]
    fn small_indices_match_the_sequence() {
        let expected = [0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, value) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as u64), *value);
        }
    }

    #[test]
    fn seventh_fibonacci_is_thirteen() {
        assert_eq!(fibonacci(7), 13);
    }

    #[test]
    fn counted_value_agrees_with_uncounted() {
        for n in 0..=20 {
            let (value, _) = fibonacci_counted(n);
            assert_eq!(value, fibonacci(n));
        }
    }

    #[test]
    fn call_count_follows_the_closed_form() {
        // The naive tree makes exactly 2 * F(n+1) - 1 calls.
        for n in 0..=15 {
            let (_, tally) = fibonacci_counted(n);
            assert_eq!(tally.calls, 2 * fibonacci_iterative(n + 1) - 1);
        }
    }

    #[test]
    fn call_counts_stay_within_exponential_prediction() {
        let mut report = GrowthReport::new("fibonacci", GrowthClass::Exponential);
        for n in 0..=12 {
            let (_, tally) = fibonacci_counted(n);
            report.push(n, tally.calls);
        }

        assert!(report.all_within_prediction(), "\n{}", report);
    }

    #[test]
    fn try_variant_matches_plain_until_the_type_overflows() {
        assert_eq!(try_fibonacci::<u8>(13), Some(233));
        assert_eq!(try_fibonacci::<u8>(14), None);
        assert_eq!(try_fibonacci::<i16>(23), Some(28_657));
        assert_eq!(try_fibonacci::<i16>(24), None);
    }

    #[test]
    fn try_variant_agrees_with_plain_for_wide_types() {
        for n in 0..=20 {
            assert_eq!(try_fibonacci::<u64>(n), Some(fibonacci(n)));
        }
    }

    #[test]
    fn iterative_matches_naive_on_small_indices() {
        for n in 0..=25 {
            assert_eq!(fibonacci_iterative(n), fibonacci(n));
        }
    }

    #[test]
    fn iterative_reaches_known_large_values() {
        assert_eq!(fibonacci_iterative(50), 12_586_269_025);
        assert_eq!(fibonacci_iterative(90), 2_880_067_194_370_816_120);
        assert_eq!(
            fibonacci_iterative(MAX_INDEX_FOR_U64),
            12_200_160_415_121_876_738
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "beyond the largest u64 Fibonacci index")]
    fn iterative_panics_past_the_largest_u64_index() {
        let _ = fibonacci_iterative(MAX_INDEX_FOR_U64 + 1);
    }

    #[test]
    fn memoized_matches_iterative_everywhere() {
        let mut memo = MemoizedFibonacci::new();
        for n in 0..=MAX_INDEX_FOR_U64 {
            assert_eq!(memo.compute(n), fibonacci_iterative(n));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "beyond the largest u64 Fibonacci index")]
    fn memoized_panics_past_the_largest_u64_index() {
        let mut memo = MemoizedFibonacci::new();
        let _ = memo.compute(MAX_INDEX_FOR_U64 + 1);
    }

    #[test]
    fn memoized_caches_every_interior_index_once() {
        let mut memo = MemoizedFibonacci::with_capacity(64);

        memo.compute(40);
        assert_eq!(memo.cache_len(), 39);

        // Repeat queries are pure lookups.
        memo.compute(40);
        memo.compute(35);
        assert_eq!(memo.cache_len(), 39);
    }

    #[test]
    fn memoized_clear_resets_the_cache() {
        let mut memo = MemoizedFibonacci::new();
        memo.compute(30);
        assert!(memo.cache_len() > 0);

        memo.clear();
        assert_eq!(memo.cache_len(), 0);
        assert_eq!(memo.compute(30), 832_040);
    }

    #[test]
    fn base_cases_are_never_cached() {
        let mut memo = MemoizedFibonacci::new();
        memo.compute(0);
        memo.compute(1);

        assert_eq!(memo.cache_len(), 0);
    }
}
