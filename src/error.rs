use thiserror::Error;

use crate::CellIndex;

/// Reasons a search request is rejected before any searching happens. Not finding a path is
/// not an error; see [SearchOutcome](crate::SearchOutcome).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("a grid needs at least one cell")]
    EmptyGrid,
    #[error("cell count {cell_count} is not a perfect square")]
    NotSquare { cell_count: usize },
    #[error("cell count {cell_count} does not fit a 32-bit cell index")]
    TooLarge { cell_count: usize },
    #[error("cell {index} is outside of a grid with {cell_count} cells")]
    IndexOutOfBounds { index: CellIndex, cell_count: usize },
    #[error("unknown search algorithm `{0}`")]
    UnknownAlgorithm(String),
}
