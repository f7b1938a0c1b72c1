//! Gauss-Jordan reduction to reduced row echelon form, one elementary row
//! operation at a time.
//!
//! [`Matrix::generate_rref_steps`] returns a lazy iterator. Each call to
//! `next` resumes the elimination where the previous call stopped, applies
//! exactly one operation to a private working copy and yields it together
//! with a snapshot of the result. The matrix it was called on is never
//! touched, and dropping the iterator early needs no cleanup.
//!
//! ```
//! use rowstep::{Matrix, Rational, StepInfo};
//!
//! let m = Matrix::from_rows(vec![
//!     vec![Rational::from(0), Rational::from(1)],
//!     vec![Rational::from(1), Rational::from(0)],
//! ])
//! .unwrap();
//!
//! let steps: Vec<_> = m.generate_rref_steps().collect();
//! assert_eq!(steps[0].info, StepInfo::Swap { row1: 0, row2: 1 });
//! assert_eq!(steps.last().unwrap().result.to_string(), "1 0\n0 1\n");
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::Result;
use crate::structures::matrix::Matrix;

/// One elementary row operation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepInfo<T> {
    /// Exchange two rows.
    Swap { row1: usize, row2: usize },
    /// Multiply every entry of `row` by `factor`.
    Scale { row: usize, factor: T },
    /// Add `factor` times row `src` into row `dest`.
    ///
    /// `src` is the pivot row and is left unchanged; `dest` is the row being
    /// cleared. The description names `src` first, then `dest`.
    Replace { dest: usize, src: usize, factor: T },
}

impl<T: Field> StepInfo<T> {
    /// Apply this operation to `matrix` in place.
    ///
    /// Replaying every step of a trace, in order, on a copy of the original
    /// matrix reproduces each step's `result`.
    pub fn apply(&self, matrix: &mut Matrix<T>) -> Result<()> {
        match self {
            StepInfo::Swap { row1, row2 } => matrix.swap_rows(*row1, *row2),
            StepInfo::Scale { row, factor } => matrix.scale_row(*row, factor),
            StepInfo::Replace { dest, src, factor } => matrix.replace_row(*dest, *src, factor),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            StepInfo::Swap { .. } => "swap",
            StepInfo::Scale { .. } => "scale",
            StepInfo::Replace { .. } => "replace",
        }
    }
}

impl<T: fmt::Display> fmt::Display for StepInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepInfo::Swap { row1, row2 } => write!(f, "Swapped row {} with {}", row1, row2),
            StepInfo::Scale { row, factor } => write!(f, "Scaled row {} by {}", row, factor),
            StepInfo::Replace { dest, src, factor } => {
                write!(f, "Replaced row {} times {} into row {}", src, factor, dest)
            }
        }
    }
}

/// An operation and the matrix immediately after applying it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(deserialize = "T: Field + serde::Deserialize<'de>")))]
pub struct Step<T> {
    pub info: StepInfo<T>,
    pub result: Matrix<T>,
}

/// Where the elimination resumes on the next call to `next`.
#[derive(Clone, Copy, Debug)]
enum Phase {
    /// Look for a pivot in column `pivot_col`, at or below `pivot_row`.
    Search,
    /// The pivot sits at `(pivot_row, pivot_col)`; normalize it to one.
    Scale,
    /// Clear `pivot_col` in row `next` and every row after it.
    Eliminate { next: usize },
    Done,
}

/// Lazy sequence of Gauss-Jordan steps over a private copy of a matrix.
///
/// Created by [`Matrix::generate_rref_steps`].
#[derive(Clone, Debug)]
pub struct RrefSteps<T> {
    work: Matrix<T>,
    pivot_row: usize,
    pivot_col: usize,
    phase: Phase,
    emitted: usize,
}

impl<T: Field> RrefSteps<T> {
    fn new(matrix: Matrix<T>) -> Self {
        tracing::debug!(rows = matrix.rows(), cols = matrix.cols(), "starting rref");
        Self {
            work: matrix,
            pivot_row: 0,
            pivot_col: 0,
            phase: Phase::Search,
            emitted: 0,
        }
    }

    /// Number of steps yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Run the remaining steps and return the reduced matrix.
    pub fn into_matrix(mut self) -> Matrix<T> {
        while self.advance().is_some() {}
        self.work
    }

    fn emit(&mut self, info: StepInfo<T>) -> Step<T> {
        self.emitted += 1;
        tracing::trace!(
            kind = info.kind(),
            pivot_row = self.pivot_row,
            pivot_col = self.pivot_col,
            "rref step"
        );
        Step {
            info,
            result: self.work.clone(),
        }
    }

    /// Apply the next operation to the working copy without snapshotting it.
    fn advance(&mut self) -> Option<StepInfo<T>> {
        let rows = self.work.rows();
        let cols = self.work.cols();

        loop {
            match self.phase {
                Phase::Search => {
                    if self.pivot_row >= rows || self.pivot_col >= cols {
                        tracing::debug!(steps = self.emitted, "rref finished");
                        self.phase = Phase::Done;
                        return None;
                    }
                    let col = self.pivot_col;
                    let found = (self.pivot_row..rows)
                        .find(|&row| !self.work.entries()[row][col].is_zero());
                    let Some(found) = found else {
                        tracing::trace!(col = self.pivot_col, "no pivot in column");
                        self.pivot_col += 1;
                        continue;
                    };
                    self.phase = Phase::Scale;
                    if found != self.pivot_row {
                        let info = StepInfo::Swap {
                            row1: self.pivot_row,
                            row2: found,
                        };
                        self.work.swap_rows_unchecked(self.pivot_row, found);
                        return Some(info);
                    }
                }
                Phase::Scale => {
                    self.phase = Phase::Eliminate { next: 0 };
                    let pivot = &self.work.entries()[self.pivot_row][self.pivot_col];
                    let factor = pivot
                        .inverse()
                        .expect("pivot search only stops at non-zero entries");
                    if !factor.is_one() {
                        self.work.scale_row_unchecked(self.pivot_row, &factor);
                        return Some(StepInfo::Scale {
                            row: self.pivot_row,
                            factor,
                        });
                    }
                }
                Phase::Eliminate { next } => {
                    let dest = if next == self.pivot_row { next + 1 } else { next };
                    if dest >= rows {
                        self.pivot_row += 1;
                        self.pivot_col += 1;
                        self.phase = Phase::Search;
                        continue;
                    }
                    self.phase = Phase::Eliminate { next: dest + 1 };
                    let factor = -self.work.entries()[dest][self.pivot_col].clone();
                    self.work.replace_row_unchecked(dest, self.pivot_row, &factor);
                    return Some(StepInfo::Replace {
                        dest,
                        src: self.pivot_row,
                        factor,
                    });
                }
                Phase::Done => return None,
            }
        }
    }
}

impl<T: Field> Iterator for RrefSteps<T> {
    type Item = Step<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.advance()?;
        Some(self.emit(info))
    }
}

impl<T: Field> FusedIterator for RrefSteps<T> {}

impl<T: Field> Matrix<T> {
    /// Lazily produce the Gauss-Jordan steps that bring this matrix to
    /// reduced row echelon form.
    ///
    /// The pivot of each column is the first non-zero entry at or below the
    /// current pivot row. Per pivot the iterator yields a swap (only when
    /// the pivot is not already in place), a scale (only when the pivot is
    /// not already one) and one replace for every other row, including rows
    /// whose multiplier is zero.
    ///
    /// Each call works on its own copy; `self` is not modified.
    ///
    /// # Panics
    ///
    /// Panics if the entry type reports a value as non-zero and then fails
    /// to invert it.
    pub fn generate_rref_steps(&self) -> RrefSteps<T> {
        RrefSteps::new(self.clone())
    }

    /// The reduced row echelon form of this matrix.
    ///
    /// Equal to the `result` of the last step, or to `self` when there are
    /// no steps.
    pub fn compute_rref(&self) -> Matrix<T> {
        self.generate_rref_steps().into_matrix()
    }

    /// Reduce this matrix to reduced row echelon form in place.
    pub fn reduce(&mut self) {
        *self = self.compute_rref();
    }

    /// Whether this matrix is already in reduced row echelon form.
    pub fn is_rref(&self) -> bool {
        let mut last_lead: Option<usize> = None;
        let mut seen_zero_row = false;
        for (i, row) in self.entries().iter().enumerate() {
            let Some(lead) = row.iter().position(|e| !e.is_zero()) else {
                seen_zero_row = true;
                continue;
            };
            if seen_zero_row || last_lead.is_some_and(|prev| lead <= prev) {
                return false;
            }
            if !row[lead].is_one() {
                return false;
            }
            let alone = self
                .entries()
                .iter()
                .enumerate()
                .all(|(j, other)| j == i || other[lead].is_zero());
            if !alone {
                return false;
            }
            last_lead = Some(lead);
        }
        true
    }
}
