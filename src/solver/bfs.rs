use crate::index_grid::IndexGrid;
use crate::solver::GridSolver;
use crate::traversal::{traverse, QueueFrontier, Traversal};
use crate::{Algorithm, CellIndex, Obstacles};

/// Breadth-first traversal. The visiting order is returned, cut off after `end`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

impl BreadthFirstSolver {
    /// The full traversal record, from which a shortest path to any visited cell can be read.
    pub fn traverse(
        &self,
        grid: &IndexGrid,
        start: CellIndex,
        end: CellIndex,
        obstacles: &Obstacles,
    ) -> Traversal {
        traverse::<QueueFrontier>(grid, start, end, obstacles)
    }
}

impl GridSolver for BreadthFirstSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
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
