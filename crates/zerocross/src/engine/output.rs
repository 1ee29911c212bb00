//! Output types for zero-crossing scans.
//!
//! ## Purpose
//!
//! This module defines [`CrossingResult`], the mode-shaped output of
//! `find_crossings`, and [`CrossingReport`], the adapter-level output that
//! also records what was scanned.
//!
//! ## Design notes
//!
//! * **Mode-shaped**: `All` yields a sequence, `First`/`Last` an optional single crossing.
//! * **Uniform access**: Both shapes expose the same slice-based accessors.
//! * **Ergonomics**: [`CrossingReport`] implements `Display` as a summary table.
//!
//! ## Invariants
//!
//! * Crossings are stored in ascending segment order.
//! * `brackets[k]` belongs to the k-th crossing of the report.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use core::slice;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::CrossingMode;
use crate::engine::series::Series;
use crate::primitives::crossing::{Crossing, CrossingKind};

// ============================================================================
// Crossing Result
// ============================================================================

/// Crossings selected by a [`CrossingMode`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossingResult<T> {
    /// Every crossing, in ascending order (`CrossingMode::All`).
    All(Vec<Crossing<T>>),

    /// At most one crossing (`CrossingMode::First` or `CrossingMode::Last`).
    Single(Option<Crossing<T>>),
}

impl<T> CrossingResult<T> {
    /// Crossings as a slice (empty, one, or many).
    pub fn as_slice(&self) -> &[Crossing<T>] {
        match self {
            Self::All(all) => all,
            Self::Single(Some(one)) => slice::from_ref(one),
            Self::Single(None) => &[],
        }
    }

    /// Iterate over the crossings.
    pub fn iter(&self) -> slice::Iter<'_, Crossing<T>> {
        self.as_slice().iter()
    }

    /// Number of crossings.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check if no crossing was found.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Leftmost crossing.
    pub fn first(&self) -> Option<&Crossing<T>> {
        self.as_slice().first()
    }

    /// Rightmost crossing.
    pub fn last(&self) -> Option<&Crossing<T>> {
        self.as_slice().last()
    }

    /// Consume the result into a vector of crossings.
    pub fn into_vec(self) -> Vec<Crossing<T>> {
        match self {
            Self::All(all) => all,
            Self::Single(one) => one.into_iter().collect(),
        }
    }
}

impl<T: Copy> CrossingResult<T> {
    /// x-locations of the crossings, in order.
    pub fn xs(&self) -> Vec<T> {
        self.iter().map(|c| c.x).collect()
    }
}

impl<'a, T> IntoIterator for &'a CrossingResult<T> {
    type Item = &'a Crossing<T>;
    type IntoIter = slice::Iter<'a, Crossing<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Crossing Report
// ============================================================================

/// Crossings together with a summary of the series they were found in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossingReport<T> {
    /// Number of samples scanned (after any close-up restriction).
    pub n_points: usize,

    /// Smallest and largest scanned x, `None` for an empty series.
    pub x_bounds: Option<(T, T)>,

    /// Mode the crossings were selected with.
    pub mode: CrossingMode,

    /// Selected crossings.
    pub crossings: CrossingResult<T>,

    /// `(x[i], x[i + 1])` interval of each crossing, aligned with `crossings`.
    pub brackets: Vec<(T, T)>,
}

impl<T: Float> CrossingReport<T> {
    /// Build a report for crossings found in `series`.
    pub fn new(series: &Series<T>, mode: CrossingMode, crossings: CrossingResult<T>) -> Self {
        let x = series.x();
        let brackets = crossings
            .iter()
            // Crossings from a different series collapse to a point bracket
            .map(|c| c.bracket(x).unwrap_or((c.x, c.x)))
            .collect();

        Self {
            n_points: series.len(),
            x_bounds: series.x_bounds(),
            mode,
            crossings,
            brackets,
        }
    }

    /// Check if any crossing was found.
    pub fn has_crossings(&self) -> bool {
        !self.crossings.is_empty()
    }

    /// x-locations of the crossings, in order.
    pub fn xs(&self) -> Vec<T> {
        self.crossings.xs()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for CrossingReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_points)?;
        if let Some((lo, hi)) = self.x_bounds {
            writeln!(f, "  X range:     {:.6} .. {:.6}", lo, hi)?;
        }
        writeln!(f, "  Mode:        {}", self.mode)?;
        writeln!(f)?;

        if self.crossings.is_empty() {
            return writeln!(f, "No sign-change zero-crossing detected.");
        }

        writeln!(f, "Zero Crossings:")?;
        writeln!(
            f,
            "  {:>12} {:>8} {:>13} {:>12} {:>12}",
            "X0", "Segment", "Kind", "X_lo", "X_hi"
        )?;
        writeln!(f, "  {}", "-".repeat(61))?;

        for (c, (lo, hi)) in self.crossings.iter().zip(self.brackets.iter()) {
            let kind = match c.kind {
                CrossingKind::Exact => "exact",
                CrossingKind::Interpolated => "interpolated",
            };
            writeln!(
                f,
                "  {:>12.6} {:>8} {:>13} {:>12.6} {:>12.6}",
                c.x, c.segment, kind, lo, hi
            )?;
        }

        Ok(())
    }
}
