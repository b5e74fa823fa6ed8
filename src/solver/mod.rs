use log::debug;

use crate::error::GridError;
use crate::index_grid::IndexGrid;
use crate::{Algorithm, CellIndex, Obstacles, SearchOutcome, SearchRequest};

pub mod astar;
pub mod bfs;
pub mod dfs;

/// A search over an [IndexGrid]. Implementations only see validated input; [solve](Self::solve)
/// does the validation.
pub trait GridSolver {
    fn algorithm(&self) -> Algorithm;

    /// Runs the search and returns its cell sequence. What the sequence means depends on the
    /// algorithm: A* returns a path from `start` to `end` or nothing, the uninformed traversals
    /// return every visited cell and only end on `end` when it was found.
    fn search(
        &self,
        grid: &IndexGrid,
        start: CellIndex,
        end: CellIndex,
        obstacles: &Obstacles,
    ) -> Vec<CellIndex>;

    /// Validates `request` and searches it. Fails on a grid that is not a non-empty square or
    /// on a start or end outside of it; an unsuccessful search is an [Ok] outcome.
    fn solve(&self, request: &SearchRequest) -> Result<SearchOutcome, GridError> {
        let grid = request.grid()?;
        debug!(
            "{} search from {} to {} on a {}x{} grid with {} obstacles",
            self.algorithm(),
            request.start,
            request.end,
            grid.side(),
            grid.side(),
            request.obstacles.len()
        );
        let cells = self.search(&grid, request.start, request.end, &request.obstacles);
        let reached = cells.last() == Some(&request.end);
        debug!(
            "{} search produced {} cells, end reached: {}",
            self.algorithm(),
            cells.len(),
            reached
        );
        Ok(SearchOutcome {
            algorithm: self.algorithm(),
            cells,
            reached,
        })
    }
}
