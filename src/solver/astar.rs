use crate::astar_list::{astar_list, DuplicatePolicy};
use crate::index_grid::IndexGrid;
use crate::solver::GridSolver;
use crate::{Algorithm, CellIndex, Obstacles};

/// A* over the open/closed lists of [astar_list] with the squared Euclidean distance between
/// cell coordinates as estimate. The estimate overshoots, so paths are connected but not
/// guaranteed to be shortest.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub duplicate_policy: DuplicatePolicy,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            duplicate_policy: DuplicatePolicy::Accumulate,
        }
    }

    /// Skips candidates already waiting in the open list at no higher cost.
    pub fn skip_dominated() -> AstarSolver {
        AstarSolver {
            duplicate_policy: DuplicatePolicy::SkipDominated,
        }
    }
}

impl GridSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn search(
        &self,
        grid: &IndexGrid,
        start: CellIndex,
        end: CellIndex,
        obstacles: &Obstacles,
    ) -> Vec<CellIndex> {
        astar_list(
            &start,
            |&ix| grid.neighbours_and_cost(ix, obstacles),
            |&ix| grid.heuristic(ix, end),
            |&ix| ix == end,
            self.duplicate_policy,
        )
        .map(|(path, _cost)| path)
        .unwrap_or_default()
    }
}
