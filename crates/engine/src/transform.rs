use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::RaggedGrid;

/// Grid transformer: bounded random fill plus the per-row
/// sign-inversion-at-minimal-difference pass.
///
/// Wraps a [`RaggedGrid`] rather than extending it; the container
/// stays reachable through [`grid`](Self::grid) and
/// [`grid_mut`](Self::grid_mut).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformer {
    grid: RaggedGrid,
}

impl Transformer {
    pub fn new(grid: RaggedGrid) -> Self {
        Self { grid }
    }

    /// Shortcut: build the underlying grid from row sizes.
    pub fn from_row_sizes(sizes: &[i64]) -> Result<Self, GridError> {
        Ok(Self::new(RaggedGrid::from_row_sizes(sizes)?))
    }

    pub fn grid(&self) -> &RaggedGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut RaggedGrid {
        &mut self.grid
    }

    pub fn into_grid(self) -> RaggedGrid {
        self.grid
    }

    /// Overwrite every element with an independent draw, uniform over
    /// `lower..=upper`. The generator is caller-supplied so runs can
    /// be reproduced with a seeded RNG.
    ///
    /// Zero-length rows have nothing to fill and are skipped; a grid
    /// with zero rows overall is rejected. Both bound and row-count
    /// checks run before any element is touched.
    pub fn fill<R: Rng>(&mut self, lower: i64, upper: i64, rng: &mut R) -> Result<(), GridError> {
        if upper < lower {
            return Err(GridError::InvalidRange { lower, upper });
        }
        if self.grid.row_count() == 0 {
            return Err(GridError::EmptyGrid);
        }
        for row in self.grid.rows_mut() {
            for item in row.iter_mut() {
                *item = rng.gen_range(lower..=upper);
            }
        }
        Ok(())
    }

    /// For every row longer than two elements, negate the interior
    /// element whose left-side and right-side sums are closest in
    /// absolute difference.
    ///
    /// Ties resolve to the leftmost qualifying index. Rows of length
    /// 0, 1, or 2 have no interior element and are left untouched.
    /// Deterministic for fixed grid content.
    pub fn invert_sign_at_minimal_difference(&mut self) {
        for row in self.grid.rows_mut() {
            if let Some(col) = index_with_minimal_difference(row) {
                row[col] = -row[col];
            }
        }
    }

    /// Base grid rendering followed by a trailing line reporting the
    /// sum of the grid's first and last elements.
    pub fn render(&self) -> Result<String, GridError> {
        let sum = self.sum_first_last()?;
        let mut out = self.grid.render();
        out.push_str(&format!("sum of first and last elements: {sum}\n"));
        Ok(out)
    }

    /// Sum of element (0, 0) and the last element of the last row.
    ///
    /// Zero rows, or a zero-length first or last row, leave one of
    /// the operands nonexistent and report [`GridError::EmptyGrid`].
    pub fn sum_first_last(&self) -> Result<i64, GridError> {
        let rows = self.grid.rows();
        let (first_row, last_row) = match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(GridError::EmptyGrid),
        };
        match (first_row.first(), last_row.last()) {
            (Some(first), Some(last)) => Ok(first + last),
            _ => Err(GridError::EmptyGrid),
        }
    }
}

/// First interior index minimizing `|leftSum - rightSum|`, or `None`
/// for rows with no interior (length <= 2).
fn index_with_minimal_difference(row: &[i64]) -> Option<usize> {
    if row.len() <= 2 {
        return None;
    }
    let mut best_col = None;
    let mut best_diff = i64::MAX;
    for col in 1..row.len() - 1 {
        let left: i64 = row[..col].iter().sum();
        let right: i64 = row[col + 1..].iter().sum();
        let diff = (left - right).abs();
        // Strict comparison keeps the leftmost index on ties
        if diff < best_diff {
            best_diff = diff;
            best_col = Some(col);
        }
    }
    best_col
}

// ============================================================================
// Tests
// ============================================================================
