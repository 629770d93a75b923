//! The triangular working buffer for De Casteljau reduction.

use crate::util;

/// An N×N scratch table for one dimension of a De Casteljau evaluation.
///
/// Row 0 holds the raw values of the control points. Each following row is
/// one element shorter than the row above it, and holds the interpolations
/// between adjacent values of that row. After a reduction, the single value
/// in row N−1 is the result.
///
/// Only the upper-left triangle is ever written; the table is kept square so
/// that it can be reused across evaluations as long as N doesn't change.
#[derive(Clone, Debug)]
pub(crate) struct InterpolationTable {
    n: usize,
    cells: Vec<f64>,
}

impl InterpolationTable {
    pub fn new(n: usize) -> InterpolationTable {
        InterpolationTable {
            n,
            cells: vec![0.0; n * n],
        }
    }

    /// The number of rows (and columns) in the table.
    #[cfg(test)]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Resize the table for a different number of control points.
    ///
    /// The contents are discarded if the size changes; nothing is allocated
    /// if it doesn't.
    pub fn resize(&mut self, n: usize) {
        if n != self.n {
            log::debug!("resizing interpolation table from {} to {}", self.n, n);
            self.n = n;
            self.cells = vec![0.0; n * n];
        }
    }

    /// The value at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[cfg(test)]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "table index out of range");
        self.cells[row * self.n + col]
    }

    /// Reduce `values` to a single value at parameter `t`.
    ///
    /// `t` is nominally in `0.0..=1.0`; values outside that range extrapolate.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or its length doesn't match the table size.
    pub fn reduce(&mut self, values: &[f64], t: f64) -> f64 {
        let n = self.n;
        assert_eq!(values.len(), n, "value count doesn't match table size");
        assert!(n > 0, "can't reduce an empty table");
        self.cells[..n].copy_from_slice(values);
        for j in 1..n {
            let (prev, row) = self.cells[(j - 1) * n..(j + 1) * n].split_at_mut(n);
            for i in 0..n - j {
                row[i] = util::lerp(prev[i], prev[i + 1], t);
            }
        }
        self.cells[(n - 1) * n]
    }
}
