use core::fmt;
use std::collections::VecDeque;

use grid_util::point::Point;
use petgraph::graphmap::DiGraphMap;
use smallvec::SmallVec;

use crate::error::GridError;
use crate::{CellIndex, Obstacles, N_SMALLVEC_SIZE, STEP_COST};

/// [IndexGrid] describes an implicit square grid whose cells are only ever referred to by
/// their linear index. Nothing per cell is stored: the side length is all that is needed to
/// derive neighbours and coordinates.
///
/// The edge rules treat a cell `i` as sitting in row `(i - 1) / side`, which is why cell `0`
/// has a left neighbour `-1` and why the last cell can step right onto `cell_count`. These
/// out-of-range cells form a thin band around the grid and are reachable like any other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexGrid {
    side: CellIndex,
    cell_count: usize,
}

impl IndexGrid {
    /// Builds the grid for `cell_count` cells. The count has to be a non-zero perfect square
    /// that fits in a [CellIndex] with room to step past the last cell.
    pub fn new(cell_count: usize) -> Result<IndexGrid, GridError> {
        if cell_count == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cell_count >= CellIndex::MAX as usize {
            return Err(GridError::TooLarge { cell_count });
        }
        let mut side = (cell_count as f64).sqrt() as usize;
        // Float rounding can be off by one for large counts
        while side * side > cell_count {
            side -= 1;
        }
        while (side + 1) * (side + 1) <= cell_count {
            side += 1;
        }
        if side * side != cell_count {
            return Err(GridError::NotSquare { cell_count });
        }
        Ok(IndexGrid {
            side: side as CellIndex,
            cell_count,
        })
    }

    pub fn side(&self) -> CellIndex {
        self.side
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Whether `index` addresses one of the `cell_count` cells of the grid.
    pub fn contains(&self, index: CellIndex) -> bool {
        index >= 0 && (index as usize) < self.cell_count
    }

    pub fn check_index(&self, index: CellIndex) -> Result<CellIndex, GridError> {
        if self.contains(index) {
            Ok(index)
        } else {
            Err(GridError::IndexOutOfBounds {
                index,
                cell_count: self.cell_count,
            })
        }
    }

    fn right_blocked(&self, index: CellIndex) -> bool {
        index.rem_euclid(self.side) == 0
    }
    fn left_blocked(&self, index: CellIndex) -> bool {
        (index - 1).rem_euclid(self.side) == 0
    }
    fn up_blocked(&self, index: CellIndex) -> bool {
        index < self.side - 1
    }
    fn down_blocked(&self, index: CellIndex) -> bool {
        index >= self.side * self.side - self.side
    }

    /// Neighbours of `index` in the order right, left, up, down. Candidates cut off by an edge
    /// rule or lying in `obstacles` are left out. The order is significant: it fixes the
    /// traversal order of the breadth- and depth-first searches and the tie-breaking of A*.
    pub fn neighbours(
        &self,
        index: CellIndex,
        obstacles: &Obstacles,
    ) -> SmallVec<[CellIndex; N_SMALLVEC_SIZE]> {
        [
            (!self.right_blocked(index), index + 1),
            (!self.left_blocked(index), index - 1),
            (!self.up_blocked(index), index - self.side),
            (!self.down_blocked(index), index + self.side),
        ]
        .into_iter()
        .filter(|(open, n)| *open && !obstacles.contains(n))
        .map(|(_, n)| n)
        .collect()
    }

    pub fn neighbours_and_cost(
        &self,
        index: CellIndex,
        obstacles: &Obstacles,
    ) -> SmallVec<[(CellIndex, i32); N_SMALLVEC_SIZE]> {
        self.neighbours(index, obstacles)
            .into_iter()
            .map(|n| (n, STEP_COST))
            .collect()
    }

    /// Whether a single step leads from `from` to `to`, ignoring obstacles.
    pub fn is_step(&self, from: CellIndex, to: CellIndex) -> bool {
        self.neighbours(from, &Obstacles::default()).contains(&to)
    }

    /// Row and column of `index` as a [Point] with `x` the column and `y` the row. The row is
    /// the truncated quotient, lowered by one when `index` is an exact multiple of the side;
    /// the column is `(index - 1) mod side`. Only used for distance estimates, so the mapping
    /// has to be consistent rather than pretty.
    pub fn coordinates(&self, index: CellIndex) -> Point {
        let mut row = index / self.side;
        if index % self.side == 0 {
            row -= 1;
        }
        let col = (index - 1).rem_euclid(self.side);
        Point::new(col, row)
    }

    /// Squared Euclidean distance between the [coordinates](Self::coordinates) of two cells.
    pub fn heuristic(&self, a: CellIndex, b: CellIndex) -> i32 {
        let pa = self.coordinates(a);
        let pb = self.coordinates(b);
        let dx = pa.x - pb.x;
        let dy = pa.y - pb.y;
        dx * dx + dy * dy
    }

    /// The directed graph of steps reachable from `start`. Edges are not symmetric: on a 3x3
    /// grid cell `-2` steps down to `1`, but `1` has no step up.
    pub fn adjacency_graph(
        &self,
        start: CellIndex,
        obstacles: &Obstacles,
    ) -> DiGraphMap<CellIndex, ()> {
        let mut graph = DiGraphMap::new();
        graph.add_node(start);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for n in self.neighbours(node, obstacles) {
                if !graph.contains_node(n) {
                    queue.push_back(n);
                }
                graph.add_edge(node, n, ());
            }
        }
        graph
    }

    /// Cells laid out in the rows the edge rules step along: row `r` holds
    /// `r * side + 1 ..= r * side + side`. Rows run from `-1`, the band above the grid ending in
    /// cell `0`, to `side - 1`, which ends in cell `cell_count`. Horizontally adjacent cells in a
    /// row are one step apart, and so are vertically adjacent ones where a step exists.
    pub fn layout_rows(&self) -> impl Iterator<Item = Vec<CellIndex>> + '_ {
        (-1..self.side).map(move |row| {
            (1..=self.side)
                .map(|col| row * self.side + col)
                .collect::<Vec<CellIndex>>()
        })
    }

    /// Renders [layout_rows](Self::layout_rows): `#` for obstacles, `.` for free cells of the
    /// grid and `:` for free cells outside of it.
    pub fn render(&self, obstacles: &Obstacles) -> String {
        let mut out = String::with_capacity(self.cell_count + 3 * self.side as usize + 1);
        for row in self.layout_rows() {
            for ix in row {
                out.push(if obstacles.contains(&ix) {
                    '#'
                } else if self.contains(ix) {
                    '.'
                } else {
                    ':'
                });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for IndexGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid ({0}x{0}):", self.side)?;
        for values in self.layout_rows() {
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
