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

//! # Landau Algorithms
//!
//! Classic algorithms written to make their asymptotic growth visible.
//! Each algorithm ships in its plain textbook form plus an instrumented
//! `_counted` variant that tallies basic operations into a
//! [`CostTally`](landau_core::cost::CostTally), so the growth class
//! claimed in the docs can be checked rather than believed.
//!
//! ## Modules
//!
//! - `search`: Linear scan (O(n)) and halving search over sorted slices
//!   (O(log n)), with a probe-trace variant for the latter.
//! - `sort`: Stable merge sort (O(n log n)).
//! - `recurrence`: The naive doubly recursive Fibonacci (O(2^n)), kept
//!   exponential on purpose, next to iterative and memoized contrasts.
//! - `collections`: A dynamic array with explicit capacity doubling,
//!   showing amortized O(1) growth and O(n) shifting.
//! - `catalog`: A static table mapping every operation in this crate to
//!   its growth class.
//!
//! ## Purpose
//!
//! None of these implementations try to beat the standard library. They
//! exist to be read, stepped through, and measured.
//!
//! Refer to each module for detailed APIs and examples.

pub mod catalog;
pub mod collections;
pub mod recurrence;
pub mod search;
pub mod sort;
