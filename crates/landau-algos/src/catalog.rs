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

//! # Growth Catalog
//!
//! A static table mapping every primary operation in this crate to its
//! growth class, so the collection can be surveyed without opening each
//! module. Instrumented `_counted` and `_trace` variants share the class
//! of their base operation and are not listed separately, and
//! `try_remove_at` shares the `remove_at` row. Constructors,
//! conversions, and single-slot accessors such as `len` and `get` are
//! not catalogued. A test pins the exact roster, so a new operation has
//! to be classified here deliberately.

use landau_core::growth::GrowthClass;

/// Growth classification for the primary operations of this crate,
/// sorted by operation name.
pub const GROWTH_CATALOG: &[(&str, GrowthClass)] = &[
    ("collections::DynArray::contains", GrowthClass::Linear),
    ("collections::DynArray::index_of", GrowthClass::Linear),
    ("collections::DynArray::insert", GrowthClass::Linear),
    ("collections::DynArray::push", GrowthClass::Constant), // amortized
    ("collections::DynArray::remove_at", GrowthClass::Linear),
    ("recurrence::MemoizedFibonacci::compute", GrowthClass::Linear),
    ("recurrence::fibonacci", GrowthClass::Exponential),
    ("recurrence::fibonacci_iterative", GrowthClass::Linear),
    ("recurrence::try_fibonacci", GrowthClass::Exponential),
    ("search::binary_search", GrowthClass::Logarithmic),
    ("search::is_sorted_ascending", GrowthClass::Linear),
    ("search::linear_search", GrowthClass::Linear),
    ("sort::merge_sort", GrowthClass::Linearithmic),
];

/// Looks up the growth class of an operation by its catalogued name.
///
/// The table holds a handful of entries, so this is a plain linear scan.
///
/// # Examples
///
/// ```
/// use landau_algos::catalog::growth_of;
/// use landau_core::growth::GrowthClass;
///
/// assert_eq!(growth_of("sort::merge_sort"), Some(GrowthClass::Linearithmic));
/// assert_eq!(growth_of("sort::bogo_sort"), None);
/// ```
pub fn growth_of(operation: &str) -> Option<GrowthClass> {
    GROWTH_CATALOG
        .iter()
        .find(|(name, _)| *name == operation)
        .map(|&(_, class)| class)
}
