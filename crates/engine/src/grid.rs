use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Ragged two-dimensional integer grid.
///
/// Rows are independently sized, ordered, and fixed in length once
/// constructed. Transformations mutate elements in place; nothing
/// ever resizes a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaggedGrid {
    rows: Vec<Vec<i64>>,
}

impl RaggedGrid {
    /// Build a grid with one zero-initialized row per entry in `sizes`,
    /// in input order.
    ///
    /// Sizes arrive as signed integers from external configuration; a
    /// negative entry is rejected before any row is allocated. Zero
    /// rows and zero-length rows are both permitted here — operations
    /// that cannot work on them reject them at call time.
    pub fn from_row_sizes(sizes: &[i64]) -> Result<Self, GridError> {
        for &size in sizes {
            if size < 0 {
                return Err(GridError::InvalidDimension { size });
            }
        }
        let rows = sizes.iter().map(|&size| vec![0; size as usize]).collect();
        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `row`.
    pub fn row_len(&self, row: usize) -> Result<usize, GridError> {
        self.rows
            .get(row)
            .map(Vec::len)
            .ok_or(GridError::IndexOutOfRange { row, col: 0 })
    }

    pub fn get(&self, row: usize, col: usize) -> Result<i64, GridError> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(GridError::IndexOutOfRange { row, col })
    }

    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<(), GridError> {
        let slot = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GridError::IndexOutOfRange { row, col })?;
        *slot = value;
        Ok(())
    }

    /// Read-only view of the rows.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<i64>] {
        &mut self.rows
    }

    /// One line per row, elements space-separated, each line
    /// newline-terminated. An empty grid renders as the empty string.
    /// Pure formatting — no numeric computation happens here.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let items: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            out.push_str(&items.join(" "));
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
