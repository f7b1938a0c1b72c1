use core::fmt;

use crate::algebra::field::Field;
use crate::error::{Error, Result};

/// A dense `rows × cols` matrix over a field, stored row by row.
///
/// The matrix owns its entries; cloning copies every cell, so no two
/// matrices ever share storage.
///
/// # Example
///
/// ```
/// use rowstep::{Matrix, Rational};
///
/// let m = Matrix::from_rows(vec![
///     vec![Rational::from(1), Rational::from(2)],
///     vec![Rational::from(3), Rational::from(4)],
/// ])
/// .unwrap();
/// assert_eq!(m.get(1, 0).unwrap(), &Rational::from(3));
/// assert_eq!(m.to_string(), "1 2\n3 4\n");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    entries: Vec<Vec<T>>,
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Matrix<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Matrix", 3)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cols", &self.cols)?;
        state.serialize_field("entries", &self.entries)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Field + serde::Deserialize<'de>> serde::Deserialize<'de> for Matrix<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            rows: usize,
            cols: usize,
            entries: Vec<Vec<T>>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Matrix::new(raw.rows, raw.cols, raw.entries).map_err(serde::de::Error::custom)
    }
}

impl<T: Field> Matrix<T> {
    /// Create a `rows × cols` matrix from its rows.
    ///
    /// Returns `Error::ShapeMismatch` unless `entries` holds exactly `rows`
    /// rows of exactly `cols` entries each.
    pub fn new(rows: usize, cols: usize, entries: Vec<Vec<T>>) -> Result<Self> {
        if entries.len() != rows {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                detail: format!("got {} rows", entries.len()),
            });
        }
        if let Some((i, row)) = entries.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                detail: format!("row {} has {} entries", i, row.len()),
            });
        }
        Ok(Self {
            rows,
            cols,
            entries,
        })
    }

    /// Create a matrix from its rows, taking the width from the first row.
    ///
    /// An empty `entries` gives a `0 × 0` matrix.
    pub fn from_rows(entries: Vec<Vec<T>>) -> Result<Self> {
        let rows = entries.len();
        let cols = entries.first().map_or(0, Vec::len);
        Self::new(rows, cols, entries)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow the entry at `(row, col)`.
    ///
    /// Returns `Error::OutOfBounds` unless `row < rows` and `col < cols`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.check_bounds(row, col)?;
        Ok(&self.entries[row][col])
    }

    /// Overwrite the entry at `(row, col)`.
    ///
    /// Returns `Error::OutOfBounds` unless `row < rows` and `col < cols`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        self.entries[row][col] = value;
        Ok(())
    }

    /// Borrow a whole row.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        self.check_row(row)?;
        Ok(&self.entries[row])
    }

    pub fn entries(&self) -> &[Vec<T>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Vec<T>> {
        self.entries
    }

    /* ---- elementary row operations ---- */

    /// Exchange rows `row1` and `row2`.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        self.swap_rows_unchecked(row1, row2);
        Ok(())
    }

    /// Multiply every entry of `row` by `factor`.
    pub fn scale_row(&mut self, row: usize, factor: &T) -> Result<()> {
        self.check_row(row)?;
        self.scale_row_unchecked(row, factor);
        Ok(())
    }

    /// Add `factor` times row `src` into row `dest`; only `dest` changes.
    pub fn replace_row(&mut self, dest: usize, src: usize, factor: &T) -> Result<()> {
        self.check_row(dest)?;
        self.check_row(src)?;
        self.replace_row_unchecked(dest, src, factor);
        Ok(())
    }

    pub(crate) fn swap_rows_unchecked(&mut self, row1: usize, row2: usize) {
        self.entries.swap(row1, row2);
    }

    pub(crate) fn scale_row_unchecked(&mut self, row: usize, factor: &T) {
        for entry in &mut self.entries[row] {
            *entry = entry.clone() * factor.clone();
        }
    }

    pub(crate) fn replace_row_unchecked(&mut self, dest: usize, src: usize, factor: &T) {
        for col in 0..self.cols {
            let addend = self.entries[src][col].clone() * factor.clone();
            let entry = &mut self.entries[dest][col];
            *entry = entry.clone() + addend;
        }
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(())
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(self.out_of_bounds(row, 0));
        }
        Ok(())
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("entries", &self.entries)
            .finish()
    }
}

/// One line per row, each terminated by `\n`, with cells separated by a
/// single space.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.entries {
            for (col, entry) in row.iter().enumerate() {
                if col != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", entry)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
