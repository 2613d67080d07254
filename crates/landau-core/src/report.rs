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

use crate::growth::GrowthClass;

/// A single measured data point in a [`GrowthReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthRow {
    /// Input size the measurement was taken at.
    pub n: u64,
    /// Operation count actually recorded by the instrumented run.
    pub measured: u64,
    /// Operation count the growth class predicts for this input size.
    pub predicted: u64,
}

/// Tabulates measured operation counts against a growth class prediction.
///
/// The report does no I/O itself; rendering goes through `Display` so the
/// caller decides where the table ends up.
///
/// # Examples
///
/// ```
/// use landau_core::growth::GrowthClass;
/// use landau_core::report::GrowthReport;
///
/// let mut report = GrowthReport::new("binary_search", GrowthClass::Logarithmic);
/// report.push(1024, 11);
///
/// let rendered = report.to_string();
/// assert!(rendered.contains("binary_search [O(log n)]"));
/// assert!(rendered.contains("1024"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthReport {
    label: String,
    class: GrowthClass,
    rows: Vec<GrowthRow>,
}

impl GrowthReport {
    /// Creates an empty report for the given operation label and class.
    pub fn new(label: impl Into<String>, class: GrowthClass) -> Self {
        Self {
            label: label.into(),
            class,
            rows: Vec::new(),
        }
    }

    /// Appends a measurement, computing the prediction from the class.
    pub fn push(&mut self, n: u64, measured: u64) {
        self.rows.push(GrowthRow {
            n,
            measured,
            predicted: self.class.predicted_ops(n),
        });
    }

    /// Returns the operation label this report describes.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the growth class this report checks against.
    #[inline]
    pub fn class(&self) -> GrowthClass {
        self.class
    }

    /// Returns the recorded rows in insertion order.
    #[inline]
    pub fn rows(&self) -> &[GrowthRow] {
        &self.rows
    }

    /// Returns the number of recorded rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the report has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checks if every measured count is at most its prediction.
    ///
    /// The predictions are worst cases with constants fixed at 1, so an
    /// instrumented run that counts the same basic operation must stay at
    /// or below them. An empty report trivially satisfies this.
    pub fn all_within_prediction(&self) -> bool {
        self.rows.iter().all(|row| row.measured <= row.predicted)
    }
}

impl std::fmt::Display for GrowthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} [{}]", self.label, self.class.notation())?;
        writeln!(f, "{:<12} | {:<12} | {:<12}", "n", "Measured", "Predicted")?;
        writeln!(f, "{}", "-".repeat(42))?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12} | {:<12} | {:<12}",
                row.n, row.measured, row.predicted
            )?;
        }
        Ok(())
    }
}
