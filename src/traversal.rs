use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::trace;
use std::collections::VecDeque;

use crate::index_grid::IndexGrid;
use crate::{CellIndex, Obstacles};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A cell waiting in a [Frontier], together with the cell whose expansion pushed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    pub index: CellIndex,
    pub from: Option<CellIndex>,
}

/// The container driving an uninformed traversal. Its removal discipline alone decides whether
/// the traversal is depth-first or breadth-first.
pub trait Frontier: Default {
    fn push(&mut self, entry: FrontierEntry);
    fn pop(&mut self) -> Option<FrontierEntry>;
    fn is_empty(&self) -> bool;
}

/// Last in, first out: entries are inserted at and removed from the front.
#[derive(Clone, Debug, Default)]
pub struct StackFrontier(VecDeque<FrontierEntry>);

impl Frontier for StackFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.0.push_front(entry);
    }
    fn pop(&mut self) -> Option<FrontierEntry> {
        self.0.pop_front()
    }
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// First in, first out: entries are appended at the back and removed from the front.
#[derive(Clone, Debug, Default)]
pub struct QueueFrontier(VecDeque<FrontierEntry>);

impl Frontier for QueueFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.0.push_back(entry);
    }
    fn pop(&mut self) -> Option<FrontierEntry> {
        self.0.pop_front()
    }
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The record of one traversal: every visited cell in visiting order, each with the cell it
/// was discovered from.
#[derive(Clone, Debug, Default)]
pub struct Traversal {
    visits: FxIndexMap<CellIndex, Option<CellIndex>>,
}

impl Traversal {
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.visits.contains_key(&index)
    }

    pub fn last(&self) -> Option<CellIndex> {
        self.visits.last().map(|(&ix, _)| ix)
    }

    /// Whether the traversal stopped on `end`. A traversal that exhausts its frontier ends on
    /// whatever cell was visited last instead.
    pub fn reached(&self, end: CellIndex) -> bool {
        self.last() == Some(end)
    }

    /// Visited cells in the order they were taken off the frontier.
    pub fn visited(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.visits.keys().copied()
    }

    pub fn into_visited(self) -> Vec<CellIndex> {
        self.visits.into_keys().collect()
    }

    /// Follows discovering cells from `index` back to the start. The result is a connected
    /// walk; for a breadth-first traversal it is also a shortest one.
    pub fn path_to(&self, index: CellIndex) -> Option<Vec<CellIndex>> {
        if !self.contains(index) {
            return None;
        }
        let mut path: Vec<CellIndex> =
            std::iter::successors(Some(index), |ix| self.visits.get(ix).copied().flatten())
                .collect();
        path.reverse();
        Some(path)
    }
}

/// Takes cells off `F` until `end` has been visited or the frontier is empty. A cell can be
/// pushed many times; only its first removal counts as a visit.
pub fn traverse<F: Frontier>(
    grid: &IndexGrid,
    start: CellIndex,
    end: CellIndex,
    obstacles: &Obstacles,
) -> Traversal {
    let mut frontier = F::default();
    frontier.push(FrontierEntry {
        index: start,
        from: None,
    });
    let mut traversal = Traversal::default();
    while let Some(FrontierEntry { index, from }) = frontier.pop() {
        if traversal.visits.contains_key(&index) {
            continue;
        }
        traversal.visits.insert(index, from);
        trace!("Visiting {} from {:?}", index, from);
        for n in grid.neighbours(index, obstacles) {
            frontier.push(FrontierEntry {
                index: n,
                from: Some(index),
            });
        }
        if index == end {
            break;
        }
    }
    trace!(
        "Traversal from {} visited {} cells, frontier empty: {}",
        start,
        traversal.len(),
        frontier.is_empty()
    );
    traversal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: CellIndex) -> FrontierEntry {
        FrontierEntry { index, from: None }
    }

    fn drain(frontier: &mut impl Frontier) -> Vec<CellIndex> {
        std::iter::from_fn(|| frontier.pop())
            .map(|e| e.index)
            .collect()
    }

    #[test]
    fn stack_and_queue_disciplines() {
        let mut stack = StackFrontier::default();
        let mut queue = QueueFrontier::default();
        for ix in [1, 2, 3] {
            stack.push(entry(ix));
            queue.push(entry(ix));
        }
        assert_eq!(drain(&mut stack), vec![3, 2, 1]);
        assert_eq!(drain(&mut queue), vec![1, 2, 3]);
        assert!(stack.is_empty() && queue.is_empty());
    }

    #[test]
    fn breadth_first_3x3() {
        let grid = IndexGrid::new(9).unwrap();
        let traversal = traverse::<QueueFrontier>(&grid, 0, 8, &Obstacles::default());
        assert_eq!(
            traversal.visited().collect::<Vec<_>>(),
            vec![0, -1, 3, -2, 2, 6, 1, 5, 4, 8]
        );
        assert!(traversal.reached(8));
        assert_eq!(traversal.path_to(8), Some(vec![0, -1, 2, 5, 8]));
    }

    #[test]
    fn depth_first_3x3() {
        let grid = IndexGrid::new(9).unwrap();
        let traversal = traverse::<StackFrontier>(&grid, 0, 8, &Obstacles::default());
        assert_eq!(traversal.into_visited(), vec![0, 3, 6, 5, 8]);
    }

    #[test]
    fn exhausted_frontier_visits_everything_reachable() {
        let grid = IndexGrid::new(9).unwrap();
        let obstacles: Obstacles = [3, -1].into_iter().collect();
        let traversal = traverse::<QueueFrontier>(&grid, 0, 8, &obstacles);
        assert_eq!(traversal.into_visited(), vec![0]);

        let traversal = traverse::<QueueFrontier>(&grid, 4, 100, &Obstacles::default());
        assert_eq!(traversal.len(), 12);
        assert!(!traversal.reached(100));
        assert_eq!(traversal.path_to(100), None);
    }

    #[test]
    fn start_equals_end() {
        let grid = IndexGrid::new(9).unwrap();
        let traversal = traverse::<StackFrontier>(&grid, 4, 4, &Obstacles::default());
        assert_eq!(traversal.into_visited(), vec![4]);
    }
}
