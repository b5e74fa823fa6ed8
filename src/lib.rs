//! # index_grid_pathfinding
//!
//! Pathfinding on a square grid whose cells are addressed by a single linear index. Three
//! searches are offered: [A*](solver::astar::AstarSolver) with a list-based open set,
//! [breadth-first](solver::bfs::BreadthFirstSolver) and
//! [depth-first](solver::dfs::DepthFirstSolver) traversal. All of them share the same
//! neighbourhood rules, defined by [IndexGrid](index_grid::IndexGrid).
//!
//! The searches are pure functions of their input: nothing is cached between calls, and the
//! obstacle set is only read. Callers that animate a search iterate over the returned cells at
//! their own pace.
//!
//! ```
//! use index_grid_pathfinding::{search, Algorithm, SearchRequest};
//!
//! let request = SearchRequest::new(0, 8, 9);
//! let outcome = search(Algorithm::BreadthFirst, &request).unwrap();
//! assert!(outcome.reached);
//! assert_eq!(outcome.cells.last(), Some(&8));
//! ```
pub mod astar_list;
pub mod error;
pub mod index_grid;
pub mod solver;
pub mod traversal;

use core::fmt;
use core::str::FromStr;

use fxhash::FxHashSet;

pub use crate::error::GridError;
use crate::index_grid::IndexGrid;
use crate::solver::astar::AstarSolver;
use crate::solver::bfs::BreadthFirstSolver;
use crate::solver::dfs::DepthFirstSolver;
use crate::solver::GridSolver;

/// Linear index of a cell. Signed because the edge rules let a search step just outside the
/// grid.
pub type CellIndex = i32;

/// Cells excluded from a search.
pub type Obstacles = FxHashSet<CellIndex>;

/// Cost of a single step between neighbouring cells.
pub const STEP_COST: i32 = 1;
/// A cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;

/// The selectable searches, labelled the way a menu would show them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    AStar,
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::AStar,
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::BreadthFirst => "BFS",
            Algorithm::DepthFirst => "DFS",
        }
    }

    /// The default-configured solver for this algorithm.
    pub fn solver(&self) -> Box<dyn GridSolver> {
        match self {
            Algorithm::AStar => Box::new(AstarSolver::new()),
            Algorithm::BreadthFirst => Box::new(BreadthFirstSolver),
            Algorithm::DepthFirst => Box::new(DepthFirstSolver),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" => Ok(Algorithm::AStar),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            _ => Err(GridError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Everything a search needs: the two endpoints, the number of cells of the square grid and
/// the obstacles. Start and end are expected not to be obstacles; this is not checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub start: CellIndex,
    pub end: CellIndex,
    pub cell_count: usize,
    pub obstacles: Obstacles,
}

impl SearchRequest {
    pub fn new(start: CellIndex, end: CellIndex, cell_count: usize) -> SearchRequest {
        SearchRequest {
            start,
            end,
            cell_count,
            obstacles: Obstacles::default(),
        }
    }

    pub fn with_obstacles<I>(mut self, obstacles: I) -> SearchRequest
    where
        I: IntoIterator<Item = CellIndex>,
    {
        self.obstacles.extend(obstacles);
        self
    }

    /// The grid of this request, after checking that it is a non-empty square and that start
    /// and end lie on it.
    pub fn grid(&self) -> Result<IndexGrid, GridError> {
        let grid = IndexGrid::new(self.cell_count)?;
        grid.check_index(self.start)?;
        grid.check_index(self.end)?;
        Ok(grid)
    }
}

/// The cells produced by a search and whether they end on the requested end cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub cells: Vec<CellIndex>,
    pub reached: bool,
}

/// Runs `algorithm` with its default configuration on `request`.
pub fn search(algorithm: Algorithm, request: &SearchRequest) -> Result<SearchOutcome, GridError> {
    algorithm.solver().solve(request)
}
