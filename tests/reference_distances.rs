/// Checks breadth-first paths against distances computed by petgraph's Dijkstra on the exported
/// adjacency graph, and against the Manhattan distance of cell coordinates on open grids.
use index_grid_pathfinding::{
    index_grid::IndexGrid,
    solver::{astar::AstarSolver, bfs::BreadthFirstSolver, GridSolver},
    CellIndex, Obstacles,
};
use petgraph::algo::dijkstra;
use rand::prelude::*;

fn manhattan(grid: &IndexGrid, a: CellIndex, b: CellIndex) -> usize {
    grid.coordinates(a).manhattan_distance(&grid.coordinates(b)) as usize
}

#[test]
fn breadth_first_matches_dijkstra() {
    const N: usize = 7;
    let mut rng = StdRng::seed_from_u64(7);
    let grid = IndexGrid::new(N * N).unwrap();

    for _ in 0..500 {
        let start = rng.gen_range(0..(N * N) as CellIndex);
        let end = rng.gen_range(0..(N * N) as CellIndex);
        let obstacles: Obstacles = (0..(N * N) as CellIndex)
            .filter(|&c| c != start && c != end && rng.gen_bool(0.3))
            .collect();

        let graph = grid.adjacency_graph(start, &obstacles);
        let distances = dijkstra(&graph, start, Some(end), |_| 1);
        let traversal = BreadthFirstSolver.traverse(&grid, start, end, &obstacles);
        match distances.get(&end) {
            Some(&distance) => {
                let path = traversal.path_to(end).unwrap();
                assert_eq!(path.len() - 1, distance as usize);
            }
            None => assert!(!traversal.reached(end)),
        }
    }
}

/// On an open grid every shortest path is as long as the Manhattan distance between the
/// coordinates of its ends.
#[test]
fn open_grid_distances_are_manhattan() {
    for side in 1..=6usize {
        let grid = IndexGrid::new(side * side).unwrap();
        let cells = 0..(side * side) as CellIndex;
        for start in cells.clone() {
            for end in cells.clone() {
                let traversal = BreadthFirstSolver.traverse(&grid, start, end, &Obstacles::default());
                let path = traversal.path_to(end).unwrap();
                assert_eq!(path.len() - 1, manhattan(&grid, start, end), "{start} -> {end}");
            }
        }
    }
}

/// The squared-distance estimate never misleads A* on an open grid: its paths are shortest for
/// every pair of cells.
#[test]
fn astar_open_grid_paths_are_shortest() {
    let astar = AstarSolver::new();
    for side in 2..=8usize {
        let grid = IndexGrid::new(side * side).unwrap();
        let cells = 0..(side * side) as CellIndex;
        for start in cells.clone() {
            for end in cells.clone() {
                let path = astar.search(&grid, start, end, &Obstacles::default());
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                assert_eq!(
                    path.len() - 1,
                    manhattan(&grid, start, end),
                    "{side}x{side}: {start} -> {end}"
                );
            }
        }
    }
}
