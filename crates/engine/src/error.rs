use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A requested row length was negative.
    InvalidDimension { size: i64 },
    /// Fill bounds with the upper bound below the lower bound.
    InvalidRange { lower: i64, upper: i64 },
    /// The operation needs at least one row (and a first/last element).
    EmptyGrid,
    /// Element access with an invalid row index or a column outside
    /// that row's length.
    IndexOutOfRange { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { size } => write!(f, "invalid row length: {size}"),
            Self::InvalidRange { lower, upper } => {
                write!(f, "invalid fill range: upper bound {upper} is below lower bound {lower}")
            }
            Self::EmptyGrid => write!(f, "empty grid: nothing to operate on"),
            Self::IndexOutOfRange { row, col } => {
                write!(f, "element ({row}, {col}) is out of range")
            }
        }
    }
}

impl std::error::Error for GridError {}
