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

/// Operation counts collected by an instrumented algorithm run.
///
/// The three counters map onto the three kinds of basic operation the
/// algorithm collection counts: element comparisons (searching, sorting),
/// element moves (sorting, container shifting), and function calls
/// (recursive algorithms). An algorithm only touches the counters that
/// are meaningful for it and leaves the rest at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostTally {
    /// Number of element comparisons performed.
    pub comparisons: u64,
    /// Number of element moves or copies performed.
    pub moves: u64,
    /// Number of function calls performed.
    pub calls: u64,
}

impl CostTally {
    /// Creates a new tally with all counters at zero.
    #[inline]
    pub const fn new() -> Self {
        Self {
            comparisons: 0,
            moves: 0,
            calls: 0,
        }
    }

    /// Records a single element comparison.
    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Records a single element move or copy.
    #[inline]
    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    /// Records a single function call.
    #[inline]
    pub fn record_call(&mut self) {
        self.calls += 1;
    }

    /// Returns the sum of all counters, saturating at `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use landau_core::cost::CostTally;
    ///
    /// let mut tally = CostTally::new();
    /// tally.record_comparison();
    /// tally.record_comparison();
    /// tally.record_move();
    /// assert_eq!(tally.total(), 3);
    /// ```
    #[inline]
    pub fn total(&self) -> u64 {
        self.comparisons
            .saturating_add(self.moves)
            .saturating_add(self.calls)
    }
}

impl std::fmt::Display for CostTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cost Tally:")?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Moves: {}", self.moves)?;
        writeln!(f, "  Calls: {}", self.calls)
    }
}

/// Builder for `CostTally`.
///
/// Instrumented runs fill a tally in place through the `record_*`
/// methods; the builder exists for constructing expected tallies, most
/// often in tests and examples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTallyBuilder {
    comparisons: u64,
    moves: u64,
    calls: u64,
}

impl Default for CostTallyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CostTallyBuilder {
    /// Creates a new `CostTallyBuilder` with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            comparisons: 0,
            moves: 0,
            calls: 0,
        }
    }

    /// Sets the number of comparisons.
    #[inline]
    pub fn comparisons(mut self, comparisons: u64) -> Self {
        self.comparisons = comparisons;
        self
    }

    /// Sets the number of moves.
    #[inline]
    pub fn moves(mut self, moves: u64) -> Self {
        self.moves = moves;
        self
    }

    /// Sets the number of calls.
    #[inline]
    pub fn calls(mut self, calls: u64) -> Self {
        self.calls = calls;
        self
    }

    /// Builds the `CostTally` instance.
    #[inline]
    pub fn build(self) -> CostTally {
        CostTally {
            comparisons: self.comparisons,
            moves: self.moves,
            calls: self.calls,
        }
    }
}
