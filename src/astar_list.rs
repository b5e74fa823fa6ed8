//! List-based best-first search in the A* mould. Unlike a heap-driven A*, the open list is a plain
//! vector scanned for the first node with the smallest estimate, so ties are broken by insertion
//! order. Nodes live in an arena and point to their parent by handle; the whole tree is dropped
//! once the path has been read back.

use fxhash::FxHashSet;
use itertools::Itertools;
use log::{trace, warn};
use num_traits::Zero;
use std::hash::Hash;

/// How candidates whose position is already waiting in the open list are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Always append the candidate, so one position can sit in the open list several times and
    /// be expanded more than once.
    #[default]
    Accumulate,
    /// Skip the candidate when the open list already holds its position at a cost no higher.
    SkipDominated,
}

#[derive(Clone, Debug)]
pub(crate) struct SearchNode<N, C> {
    pub position: N,
    pub parent: Option<usize>,
    pub g: C,
    pub h: C,
    pub f: C,
}

impl<N: PartialEq, C> PartialEq for SearchNode<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

fn reverse_path<N, C>(arena: &[SearchNode<N, C>], start: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path: Vec<N> = std::iter::successors(arena.get(start), |node| {
        node.parent.and_then(|ix| arena.get(ix))
    })
    .map(|node| node.position.clone())
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds for an expanded node and returns the path to it
/// together with its accumulated cost. Each successor is paired with the cost of the step
/// towards it; `heuristic` estimates the remaining cost. Returns [None] once the open list runs
/// dry.
pub fn astar_list<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    policy: DuplicatePolicy,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut arena: Vec<SearchNode<N, C>> = vec![SearchNode {
        position: start.clone(),
        parent: None,
        g: Zero::zero(),
        h: Zero::zero(),
        f: Zero::zero(),
    }];
    let mut open: Vec<usize> = vec![0];
    let mut closed: FxHashSet<N> = FxHashSet::default();

    loop {
        let Some(slot) = open.iter().position_min_by_key(|&&ix| arena[ix].f) else {
            break;
        };
        let current = open.remove(slot);
        trace!(
            "Expanding node {} from open slot {}, open {}, closed {}",
            current,
            slot,
            open.len(),
            closed.len()
        );
        let (position, g) = {
            let node = &arena[current];
            debug_assert!(node.f == node.g + node.h);
            (node.position.clone(), node.g)
        };
        closed.insert(position.clone());
        if success(&position) {
            trace!("Goal reached after {} nodes", arena.len());
            return Some((reverse_path(&arena, current), g));
        }
        for (successor, move_cost) in successors(&position) {
            if closed.contains(&successor) {
                continue;
            }
            let g_new = g + move_cost;
            if policy == DuplicatePolicy::SkipDominated
                && open
                    .iter()
                    .any(|&ix| arena[ix].position == successor && arena[ix].g <= g_new)
            {
                continue;
            }
            let h = heuristic(&successor);
            arena.push(SearchNode {
                position: successor,
                parent: Some(current),
                g: g_new,
                h,
                f: g_new + h,
            });
            open.push(arena.len() - 1);
        }
    }
    warn!("Open list exhausted after {} nodes, no path", arena.len());
    None
}
