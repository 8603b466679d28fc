//! Perceptual cost matrix between input colors and the candidate palette.
//!
//! Row order follows input order; column order follows candidate order, so
//! column `j` of every row scores the same [`Candidate`](crate::Candidate).
//! Each input is converted to Lab once per row and each candidate's Lab
//! comes precomputed from the palette table, keeping the build at one
//! conversion per color plus N×M distance evaluations.

use crate::color::Rgb;
use crate::colorspace::rgb_to_lab;
use crate::deltae::delta_e2000;
use crate::palette::candidates;

/// A dense row-major matrix of non-negative perceptual distances.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Builds the cost matrix for `colors` against the full candidate
    /// palette: entry `(i, j)` is the CIEDE2000 distance between input `i`
    /// and candidate `j`.
    ///
    /// An empty input yields a degenerate matrix with zero rows.
    pub fn build(colors: &[Rgb]) -> Self {
        let table = candidates();
        let mut data = Vec::with_capacity(colors.len() * table.len());

        for &color in colors {
            let lab = rgb_to_lab(color);
            for cand in table {
                data.push(delta_e2000(lab, cand.lab));
            }
        }

        Self {
            rows: colors.len(),
            cols: table.len(),
            data,
        }
    }

    /// Builds a matrix from explicit row data, mainly for exercising the
    /// solver on hand-written costs.
    ///
    /// # Panics
    ///
    /// Panics if the rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "all rows must have the same length"
        );

        Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of rows (input colors).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (candidates).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// The cost at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }
}
