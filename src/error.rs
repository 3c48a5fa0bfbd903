use thiserror::Error;

/// Errors returned by maze construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze must be at least 2x2, got height {height} and width {width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("edge weight range {low}..={high} is empty or includes zero")]
    InvalidWeightRange { low: u32, high: u32 },

    #[error("cell {cell} is outside the maze of {cells} cells")]
    CellOutOfBounds { cell: usize, cells: usize },

    #[error("no path from cell {from} to cell {to}")]
    PathNotFound { from: usize, to: usize },
}
