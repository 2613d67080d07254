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

//! # Growth Classes
//!
//! The asymptotic growth classes covered by the Landau collection, as a
//! plain enum ordered by dominance. Each algorithm in the collection is
//! tagged with one of these classes, and the instrumented algorithm
//! variants can be checked against the class's worst-case prediction.
//!
//! ## Ordering
//!
//! The variants are declared from slowest-growing to fastest-growing, so
//! the derived `Ord` is the dominance order: `O(1) < O(log n) < O(n) <
//! O(n log n) < O(n^2) < O(2^n)`.
//!
//! ## Predictions
//!
//! [`GrowthClass::predicted_ops`] maps an input size `n` to the number of
//! basic operations the class predicts in the worst case. The constants
//! hidden by big-O notation are fixed at 1, which matches how the
//! instrumented variants in the algorithm crate count: one tally per
//! probe, per element visit, or per call.

/// An asymptotic growth class in big-O notation.
///
/// The variants are declared in dominance order, so comparison operators
/// ask "does the right class grow faster than the left one":
///
/// ```
/// use landau_core::growth::GrowthClass;
///
/// assert!(GrowthClass::Logarithmic < GrowthClass::Linear);
/// assert!(GrowthClass::Linearithmic < GrowthClass::Exponential);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrowthClass {
    /// O(1): the operation count does not depend on the input size.
    Constant,
    /// O(log n): the operation count grows with the number of times the
    /// input can be halved.
    Logarithmic,
    /// O(n): the operation count grows proportionally to the input size.
    Linear,
    /// O(n log n): the operation count grows linearly with an extra
    /// halving factor, typical of divide-and-conquer sorts.
    Linearithmic,
    /// O(n^2): the operation count grows with the square of the input
    /// size.
    Quadratic,
    /// O(2^n): the operation count doubles with every unit of input
    /// size.
    Exponential,
}

impl GrowthClass {
    /// Every growth class, in dominance order.
    ///
    /// # Examples
    ///
    /// ```
    /// use landau_core::growth::GrowthClass;
    ///
    /// assert_eq!(GrowthClass::ALL.len(), 6);
    /// assert_eq!(GrowthClass::ALL[0], GrowthClass::Constant);
    /// assert_eq!(GrowthClass::ALL[5], GrowthClass::Exponential);
    /// ```
    pub const ALL: [GrowthClass; 6] = [
        GrowthClass::Constant,
        GrowthClass::Logarithmic,
        GrowthClass::Linear,
        GrowthClass::Linearithmic,
        GrowthClass::Quadratic,
        GrowthClass::Exponential,
    ];

    /// Returns the big-O notation for this class as a static string.
    ///
    /// # Examples
    ///
    /// ```
    /// use landau_core::growth::GrowthClass;
    ///
    /// assert_eq!(GrowthClass::Logarithmic.notation(), "O(log n)");
    /// assert_eq!(GrowthClass::Exponential.notation(), "O(2^n)");
    /// ```
    #[inline]
    pub const fn notation(&self) -> &'static str {
        match self {
            GrowthClass::Constant => "O(1)",
            GrowthClass::Logarithmic => "O(log n)",
            GrowthClass::Linear => "O(n)",
            GrowthClass::Linearithmic => "O(n log n)",
            GrowthClass::Quadratic => "O(n^2)",
            GrowthClass::Exponential => "O(2^n)",
        }
    }

    /// Predicts the worst-case number of basic operations for an input of
    /// size `n`, with all big-O constants fixed at 1.
    ///
    /// The logarithmic prediction is `floor(log2 n) + 1`, the number of
    /// halving steps needed to shrink `n` elements down to none. The
    /// exponential prediction is `2^n`. Predictions that do not fit in a
    /// `u64` saturate at `u64::MAX` instead of wrapping.
    ///
    /// An input of size zero predicts zero operations for every class
    /// except [`GrowthClass::Constant`] (constant-time work happens
    /// regardless of input) and [`GrowthClass::Exponential`] (the empty
    /// recurrence still makes its one base-case call, and `2^0 == 1`).
    ///
    /// # Examples
    ///
    /// ```
    /// use landau_core::growth::GrowthClass;
    ///
    /// assert_eq!(GrowthClass::Constant.predicted_ops(1_000_000), 1);
    /// assert_eq!(GrowthClass::Logarithmic.predicted_ops(1024), 11);
    /// assert_eq!(GrowthClass::Linear.predicted_ops(1024), 1024);
    /// assert_eq!(GrowthClass::Linearithmic.predicted_ops(1024), 11 * 1024);
    /// assert_eq!(GrowthClass::Quadratic.predicted_ops(1024), 1024 * 1024);
    /// assert_eq!(GrowthClass::Exponential.predicted_ops(10), 1024);
    /// assert_eq!(GrowthClass::Exponential.predicted_ops(100), u64::MAX);
    /// ```
    pub fn predicted_ops(&self, n: u64) -> u64 {
        match self {
            GrowthClass::Constant => 1,
            GrowthClass::Logarithmic => halving_steps(n),
            GrowthClass::Linear => n,
            GrowthClass::Linearithmic => n.saturating_mul(halving_steps(n)),
            GrowthClass::Quadratic => n.saturating_mul(n),
            GrowthClass::Exponential => {
                let shift = u32::try_from(n).unwrap_or(u32::MAX);
                1u64.checked_shl(shift).unwrap_or(u64::MAX)
            }
        }
    }
}

impl std::fmt::Display for GrowthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notation())
    }
}

/// Returns `floor(log2 n) + 1` for positive `n` and 0 for `n == 0`.
///
/// This is the number of times `n` elements can be halved before none
/// remain, which is exactly the worst-case probe count of a halving
/// search over `n` elements.
#[inline]
fn halving_steps(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        u64::from(n.ilog2()) + 1
    }
}
