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

//! # Landau Core
//!
//! Foundational types for the Landau algorithm collection. This crate
//! holds everything the algorithm crate needs that is not itself an
//! algorithm: the vocabulary of asymptotic growth classes, the operation
//! tallies recorded by instrumented runs, and the sentinel index encoding
//! used where a search position has to travel through a plain integer.
//!
//! ## Modules
//!
//! - `growth`: The [`GrowthClass`](growth::GrowthClass) enum naming the
//!   asymptotic classes covered by the collection, ordered by dominance,
//!   with big-O notation rendering and worst-case operation predictions.
//! - `cost`: The [`CostTally`](cost::CostTally) operation counter that
//!   instrumented algorithm variants fill in as they run, plus its
//!   builder and table-style rendering.
//! - `index`: [`SearchIndex<T>`](index::SearchIndex), a transparent
//!   sentinel encoding of an optional search position where negative
//!   values mean "not found".
//! - `constants`: Associated-constant traits (`MinusOne`) backing the
//!   sentinel encoding for signed integer types.
//! - `report`: [`GrowthReport`](report::GrowthReport), a renderable table
//!   that lines up measured operation counts against the predictions of a
//!   growth class.
//!
//! ## Purpose
//!
//! The algorithms in this collection exist to make complexity visible.
//! These primitives carry the bookkeeping so the algorithm code itself can
//! stay close to the textbook form.
//!
//! Refer to each module for detailed APIs and examples.

pub mod constants;
pub mod cost;
pub mod growth;
pub mod index;
pub mod report;
