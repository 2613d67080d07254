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

//! # Collections
//!
//! Containers written to expose the costs that library containers hide.
//!
//! ## Submodules
//!
//! - `dyn_array`: A growable array with an explicit capacity-doubling
//!   policy, showing why `push` is amortized O(1) while `insert` and
//!   `remove_at` pay O(n) for shifting, and delegating membership lookup
//!   to the linear search it is built on.
//!
//! ## Motivation
//!
//! `Vec` does all of this already, and faster. The point here is that
//! the growth policy and the shifting are visible in the source and
//! measurable through the instrumented search the lookup delegates to.
//!
//! Refer to the `dyn_array` module for detailed APIs and examples.

pub mod dyn_array;
