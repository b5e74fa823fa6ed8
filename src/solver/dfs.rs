use crate::index_grid::IndexGrid;
use crate::solver::GridSolver;
use crate::traversal::{traverse, StackFrontier, Traversal};
use crate::{Algorithm, CellIndex, Obstacles};

/// Depth-first traversal. Neighbours are pushed right, left, up, down, so the last one pushed
/// (down, if open) is followed first.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver;

impl DepthFirstSolver {
    pub fn traverse(
        &self,
        grid: &IndexGrid,
        start: CellIndex,
        end: CellIndex,
        obstacles: &Obstacles,
    ) -> Traversal {
        traverse::<StackFrontier>(grid, start, end, obstacles)
    }
}

impl GridSolver for DepthFirstSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DepthFirst
    }

    fn search(
        &self,
        grid: &IndexGrid,
        start: CellIndex,
        end: CellIndex,
        obstacles: &Obstacles,
    ) -> Vec<CellIndex> {
        self.traverse(grid, start, end, obstacles).into_visited()
    }
}
