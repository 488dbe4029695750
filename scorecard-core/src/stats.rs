//! Whole-column statistics and min-max normalisation.
//!
//! Relative metrics only make sense against the extremes of the whole vendor
//! table, so scoring runs two passes: collect [`ColumnStats`] for each scored
//! column, then map every value through [`normalise_direct`] or
//! [`normalise_inverse`]. The batch shape is deliberate; a streaming design
//! cannot know the extremes before the last row arrives.
//!
//! # Examples
//! ```
//! use scorecard_core::{ColumnStats, normalise_inverse};
//!
//! let stats = ColumnStats::from_values([4.0, 5.0, 6.0]).expect("non-empty");
//! assert_eq!(normalise_inverse(4.0, &stats), 100.0);
//! assert_eq!(normalise_inverse(6.0, &stats), 0.0);
//! ```

#![forbid(unsafe_code)]

/// Score assigned to every value of a column whose extremes coincide. A
/// column with no spread carries no signal, so nobody is penalised for it.
const DEGENERATE_SCORE: f64 = 100.0;

/// Minimum and maximum of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    min: f64,
    max: f64,
}

impl ColumnStats {
    /// Fold an iterator of finite values into its extremes.
    ///
    /// Returns `None` for an empty iterator. Values are expected to be
    /// finite; validated vendor records guarantee this.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for value in iter {
            min = min.min(value);
            max = max.max(value);
        }
        Some(Self { min, max })
    }

    /// Smallest value observed in the column.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest value observed in the column.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// True when every value in the column was identical.
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "degeneracy is exact equality of the extremes"
    )]
    pub const fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Scale a value onto 0–100 with the column maximum scoring 100.
///
/// Every value of a degenerate column scores 100; see
/// [`ColumnStats::is_degenerate`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "min-max scaling is arithmetic over the column extremes"
)]
pub const fn normalise_direct(value: f64, stats: &ColumnStats) -> f64 {
    if stats.is_degenerate() {
        return DEGENERATE_SCORE;
    }
    (value - stats.min) / (stats.max - stats.min) * 100.0
}

/// Scale a value onto 0–100 with the column minimum scoring 100.
///
/// Used for metrics where lower raw values are better, such as unit cost or
/// lead time. Every value of a degenerate column scores 100.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "min-max scaling is arithmetic over the column extremes"
)]
pub const fn normalise_inverse(value: f64, stats: &ColumnStats) -> f64 {
    if stats.is_degenerate() {
        return DEGENERATE_SCORE;
    }
    (stats.max - value) / (stats.max - stats.min) * 100.0
}
