//! Minimum-cost bipartite assignment (Kuhn-Munkres).
//!
//! Solves the assignment problem on a rectangular cost matrix with at most
//! as many rows as columns: every row receives a distinct column, columns
//! may stay unassigned, and the sum of selected costs is minimal.
//!
//! The implementation is the shortest-augmenting-path formulation: rows and
//! columns carry dual potentials, and each row is inserted by a Dijkstra-like
//! search over reduced costs that grows an alternating tree until it reaches
//! a free column, after which potentials are updated and the path is flipped.
//! Each of the N insertions costs O(N·M), giving the O(n³) total bound.
//!
//! Ties on the minimal slack resolve to the lowest column index, which makes
//! the result deterministic for identical input.

use crate::error::{MatchError, Result};
use crate::matrix::CostMatrix;

/// Computes the minimum-cost assignment for `matrix`.
///
/// Returns the assigned column for each row, in row order. The returned
/// columns are pairwise distinct.
///
/// # Errors
///
/// [`MatchError::TooManyColors`] when the matrix has more rows than
/// columns; no complete row matching can exist.
pub fn solve(matrix: &CostMatrix) -> Result<Vec<usize>> {
    let rows = matrix.rows();
    let cols = matrix.cols();

    if rows > cols {
        return Err(MatchError::TooManyColors {
            inputs: rows,
            candidates: cols,
        });
    }
    if rows == 0 {
        return Ok(Vec::new());
    }

    // Dual potentials. Column index `cols` is a virtual root used to stage
    // the row currently being inserted; its potential is never read by a
    // reduced cost.
    let mut row_potential = vec![0.0f64; rows];
    let mut col_potential = vec![0.0f64; cols + 1];
    // owner[col] is the row currently matched to `col`.
    let mut owner: Vec<Option<usize>> = vec![None; cols + 1];
    // Predecessor column on the alternating path, per column.
    let mut prev = vec![0usize; cols];

    for row in 0..rows {
        owner[cols] = Some(row);
        let mut current = cols;
        // slack[col]: smallest reduced cost from any tree row to `col`.
        let mut slack = vec![f64::INFINITY; cols];
        let mut in_tree = vec![false; cols + 1];

        // Grow the tree until the search steps onto a free column. An
        // unvisited column always exists because rows <= cols.
        while let Some(occupant) = owner[current] {
            in_tree[current] = true;
            let mut delta = f64::INFINITY;
            let mut next = cols;

            for col in 0..cols {
                if in_tree[col] {
                    continue;
                }
                let reduced =
                    matrix.get(occupant, col) - row_potential[occupant] - col_potential[col];
                if reduced < slack[col] {
                    slack[col] = reduced;
                    prev[col] = current;
                }
                // Strict comparison over the in-order scan keeps the
                // lowest column index on ties.
                if slack[col] < delta {
                    delta = slack[col];
                    next = col;
                }
            }

            // Shift potentials by the bottleneck slack so tree edges stay
            // tight and the next column enters at zero reduced cost.
            for col in 0..=cols {
                if in_tree[col] {
                    if let Some(tree_row) = owner[col] {
                        row_potential[tree_row] += delta;
                    }
                    col_potential[col] -= delta;
                } else if col < cols {
                    slack[col] -= delta;
                }
            }

            current = next;
        }

        // Flip the augmenting path back to the root.
        while current != cols {
            let parent = prev[current];
            owner[current] = owner[parent];
            current = parent;
        }
    }

    let mut assignment = vec![0usize; rows];
    for (col, &slot) in owner[..cols].iter().enumerate() {
        if let Some(row) = slot {
            assignment[row] = col;
        }
    }
    Ok(assignment)
}
