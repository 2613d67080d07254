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

use crate::constants;
use num_traits::{FromPrimitive, Signed, ToPrimitive};

/// A search position that may be absent.
///
/// Instead of using `Option<usize>`, this type uses a sentinel encoding to
/// avoid the additional discriminant that `Option` typically introduces for
/// integer types. Dense tables of search results stay one machine word per
/// entry, and the encoding matches the classic convention of returning `-1`
/// for a failed search.
///
/// Encoding:
/// - Non-negative values (>= 0) represent a found position.
/// - Negative values (<= -1) are reserved to indicate "not found".
///
/// The search functions themselves return `Option<usize>`; this type is the
/// bridge for callers that want the sentinel form.
///
/// # Examples
///
/// ```rust
/// use landau_core::index::SearchIndex;
///
/// let hit = SearchIndex::<i64>::found(3);
/// assert_eq!(hit.raw(), 3);
///
/// let miss = SearchIndex::<i64>::not_found();
/// assert_eq!(miss.raw(), -1);
/// assert_eq!(miss.get(), None);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchIndex<T>(T)
where
    T: Signed;

impl<T> SearchIndex<T>
where
    T: Copy + Signed + constants::MinusOne,
{
    const NOT_FOUND_SENTINEL: T = T::MINUS_ONE;

    /// Creates a `SearchIndex` from an optional position.
    ///
    /// # Panics
    ///
    /// This function will panic if the position does not fit in the raw
    /// type `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use landau_core::index::SearchIndex;
    ///
    /// let hit = SearchIndex::<i32>::from_option(Some(5));
    /// assert!(hit.is_found());
    /// assert_eq!(hit.raw(), 5);
    ///
    /// let miss = SearchIndex::<i32>::from_option(None);
    /// assert_eq!(miss.raw(), -1);
    /// ```
    #[inline]
    pub fn from_option(value: Option<usize>) -> Self
    where
        T: FromPrimitive,
    {
        match value {
            Some(index) => Self::found(index),
            None => Self::not_found(),
        }
    }

    /// Creates a `SearchIndex` from a raw value without checking for sentinel.
    /// If you pass a negative value, it will be treated as "not found".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use landau_core::index::SearchIndex;
    ///
    /// let hit = SearchIndex::from_raw(10i32);
    /// assert!(hit.is_found());
    /// assert_eq!(hit.raw(), 10);
    /// ```
    #[inline]
    pub const fn from_raw(value: T) -> Self {
        SearchIndex(value)
    }

    /// Creates a `SearchIndex` representing a found position.
    ///
    /// # Panics
    ///
    /// This function will panic if the position does not fit in the raw
    /// type `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use landau_core::index::SearchIndex;
    ///
    /// let hit = SearchIndex::<i16>::found(7);
    /// assert!(hit.is_found());
    /// assert_eq!(hit.raw(), 7);
    /// ```
    pub fn found(index: usize) -> Self
    where
        T: FromPrimitive,
    {
        match T::from_usize(index) {
            Some(value) => SearchIndex(value),
            None => panic!(
                "called `SearchIndex::found` with a position out of range for the raw type: {}",
                index
            ),
        }
    }

    /// Creates a `SearchIndex` representing "not found".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use landau_core::index::SearchIndex;
    ///
    /// let miss: SearchIndex<i32> = SearchIndex::not_found();
    /// assert!(miss.is_not_found());
    /// assert_eq!(miss.raw(), -1);
    /// ```
    #[inline]
    pub fn not_found() -> Self {
        SearchIndex(Self::NOT_FOUND_SENTINEL)
    }

    /// Checks if the `SearchIndex` represents "not found".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use landau_core::index::SearchIndex;
    ///
    /// let miss: SearchIndex<i32> = SearchIndex::not_found();
    /// assert!(miss.is_not_found());
    /// ```
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.0.is_negative()
    }

    /// Checks if the `SearchIndex` represents a found position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use landau_core::index::SearchIndex;
    ///
    /// let hit = SearchIndex::<i32>::from_option(Some(3));
    /// assert!(hit.is_found());
    /// ```
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.is_not_found()
    }

    /// Returns the raw value, including sentinel if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use landau_core::index::SearchIndex;
    ///
    /// let hit = SearchIndex::<i32>::from_option(Some(7));
    /// assert_eq!(hit.raw(), 7);
    /// ```
    #[inline]
    pub fn raw(&self) -> T {
        self.0
    }

    /// Converts the `SearchIndex` back into an `Option<usize>`.
    ///
    /// Found positions that do not fit in `usize` also yield `None`; such
    /// values cannot index a slice in the first place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use landau_core::index::SearchIndex;
    ///
    /// let hit = SearchIndex::<i64>::from_option(Some(4));
    /// assert_eq!(hit.get(), Some(4));
    ///
    /// let miss: SearchIndex<i64> = SearchIndex::not_found();
    /// assert_eq!(miss.get(), None);
    /// ```
    #[inline]
    pub fn get(&self) -> Option<usize>
    where
        T: ToPrimitive,
    {
        if self.is_not_found() {
            None
        } else {
            self.0.to_usize()
        }
    }
}

impl<T> Default for SearchIndex<T>
where
    T: Copy + Signed + constants::MinusOne,
{
    #[inline]
    fn default() -> Self {
        Self::not_found()
    }
}

impl<T> std::fmt::Debug for SearchIndex<T>
where
    T: Copy + Signed + constants::MinusOne + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_not_found() {
            write!(f, "SearchIndex(NotFound)")
        } else {
            write!(f, "SearchIndex(Found({:?}))", self.0)
        }
    }
}

impl<T> std::fmt::Display for SearchIndex<T>
where
    T: Copy + Signed + constants::MinusOne + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_not_found() {
            write!(f, "SearchIndex(NotFound)")
        } else {
            write!(f, "SearchIndex({})", self.0)
        }
    }
}

impl<T> From<Option<usize>> for SearchIndex<T>
where
    T: Copy + Signed + constants::MinusOne + FromPrimitive,
{
    #[inline]
    fn from(value: Option<usize>) -> Self {
        SearchIndex::from_option(value)
    }
}

impl<T> From<SearchIndex<T>> for Option<usize>
where
    T: Copy + Signed + constants::MinusOne + ToPrimitive,
{
    #[inline]
    fn from(val: SearchIndex<T>) -> Self {
        val.get()
    }
}
