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

use crate::search::linear_search;

/// Capacity granted by the first push into an unallocated array.
const INITIAL_CAPACITY: usize = 4;

/// A growable array with an explicit capacity-doubling policy.
///
/// `DynArray` stores its elements contiguously and grows by doubling:
/// when a push finds the buffer full, capacity doubles before the
/// element lands. Each doubling copies every element once, but a
/// doubling from capacity `c` pays for the next `c` pushes, which is
/// what makes `push` amortized O(1).
///
/// Positional `insert` and `remove_at` shift the tail one slot and are
/// O(n); membership lookup delegates to
/// [`linear_search`](crate::search::linear_search) and is O(n) as well.
///
/// # Examples
///
/// ```
/// use landau_algos::collections::dyn_array::DynArray;
///
/// let mut array = DynArray::new();
/// array.push(1);
/// array.push(2);
/// array.push(3);
/// array.insert(1, 4);
///
/// assert_eq!(array.as_slice(), &[1, 4, 2, 3]);
/// assert_eq!(array.index_of(&2), Some(2));
/// assert_eq!(array.remove_at(1), 4);
/// assert_eq!(array.as_slice(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynArray<T> {
    buf: Vec<T>,
}

impl<T> DynArray<T> {
    /// Creates an empty array. No allocation happens until the first
    /// push.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Checks if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current capacity in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the stored elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns an iterator over the stored elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Returns a reference to the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Returns a mutable reference to the element at `index`, if any.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// Doubles the capacity when the buffer is full, so the following
    /// push never triggers the underlying growth policy.
    fn grow_if_full(&mut self) {
        if self.buf.len() == self.buf.capacity() {
            let additional = self.buf.capacity().max(INITIAL_CAPACITY);
            self.buf.reserve_exact(additional);
        }
    }

    /// Appends an element at the end.
    ///
    /// Amortized O(1): a push into a full buffer doubles the capacity
    /// first and pays O(n) for the copy, every other push is O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use landau_algos::collections::dyn_array::DynArray;
    ///
    /// let mut array = DynArray::new();
    /// array.push(7);
    /// assert_eq!(array.as_slice(), &[7]);
    /// assert!(array.capacity() >= 4);
    /// ```
    pub fn push(&mut self, value: T) {
        self.grow_if_full();
        self.buf.push(value);
    }

    /// Inserts an element at `index`, shifting everything at and after
    /// `index` one slot to the right. O(n) in the shifted tail length.
    ///
    /// # Panics
    ///
    /// This function will panic if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use landau_algos::collections::dyn_array::DynArray;
    ///
    /// let mut array: DynArray<i32> = (1..=3).collect();
    /// array.insert(1, 4);
    /// assert_eq!(array.as_slice(), &[1, 4, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.buf.len(),
            "called `DynArray::insert` with index {} out of bounds for length {}",
            index,
            self.buf.len()
        );

        self.grow_if_full();
        self.buf.push(value);

        // Bubble the new element left into place; the tail shifts right
        // one slot in the process.
        let mut position = self.buf.len() - 1;
        while position > index {
            self.buf.swap(position - 1, position);
            position -= 1;
        }
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it one slot to the left. O(n) in the shifted tail length.
    ///
    /// # Panics
    ///
    /// This function will panic if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use landau_algos::collections::dyn_array::DynArray;
    ///
    /// let mut array: DynArray<i32> = (1..=3).collect();
    /// assert_eq!(array.remove_at(0), 1);
    /// assert_eq!(array.as_slice(), &[2, 3]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.buf.len(),
            "called `DynArray::remove_at` with index {} out of bounds for length {}",
            index,
            self.buf.len()
        );

        for position in index..self.buf.len() - 1 {
            self.buf.swap(position, position + 1);
        }
        self.buf
            .pop()
            .expect("DynArray::remove_at: buffer cannot be empty after the bounds check")
    }

    /// Removes and returns the element at `index`, or `None` if `index`
    /// is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use landau_algos::collections::dyn_array::DynArray;
    ///
    /// let mut array: DynArray<i32> = (1..=3).collect();
    /// assert_eq!(array.try_remove_at(5), None);
    /// assert_eq!(array.try_remove_at(2), Some(3));
    /// ```
    pub fn try_remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.buf.len() {
            Some(self.remove_at(index))
        } else {
            None
        }
    }

    /// Drops all elements, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<T> DynArray<T>
where
    T: PartialEq,
{
    /// Returns the position of the first element equal to `value`, or
    /// `None` if no element matches. O(n) by linear scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use landau_algos::collections::dyn_array::DynArray;
    ///
    /// let array: DynArray<i32> = [4, 2, 2, 8].into_iter().collect();
    /// assert_eq!(array.index_of(&2), Some(1));
    /// assert_eq!(array.index_of(&9), None);
    /// ```
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        linear_search(&self.buf, value)
    }

    /// Checks if any stored element equals `value`. O(n).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> Default for DynArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for DynArray<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (position, value) in self.buf.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> std::ops::Index<usize> for DynArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.buf[index]
    }
}

impl<T> std::ops::IndexMut<usize> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buf[index]
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    #[inline]
    fn from(buf: Vec<T>) -> Self {
        Self { buf }
    }
}

impl<T> From<DynArray<T>> for Vec<T> {
    #[inline]
    fn from(array: DynArray<T>) -> Self {
        array.buf
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buf: Vec::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
