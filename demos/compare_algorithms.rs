use index_grid_pathfinding::{index_grid::IndexGrid, Algorithm, SearchRequest};
use std::env;

// Runs every algorithm on the same request and prints the cells it produced.
// Usage: compare_algorithms [side] [start] [end]

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let side = match args.first().map(|a| a.parse::<usize>()) {
        None => 6,
        Some(Ok(side)) => side,
        Some(Err(e)) => {
            eprintln!("side must be a non-negative integer: {e}");
            return;
        }
    };
    let index_arg = |position: usize, default: i32| {
        args.get(position)
            .and_then(|a| a.parse::<i32>().ok())
            .unwrap_or(default)
    };
    let Some(cell_count) = side.checked_mul(side) else {
        eprintln!("side {side} is too large");
        return;
    };
    let grid = match IndexGrid::new(cell_count) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let side = grid.side();
    let start = index_arg(1, 1);
    let end = index_arg(2, side * side - 2);
    let request = SearchRequest::new(start, end, cell_count)
        .with_obstacles((1..side - 1).map(|i| i * side + 2));
    print!("{}", grid.render(&request.obstacles));

    for algorithm in Algorithm::ALL {
        match algorithm.solver().solve(&request) {
            Ok(outcome) => println!(
                "{:>3}: reached {:<5} {:?}",
                algorithm.label(),
                outcome.reached,
                outcome.cells
            ),
            Err(e) => println!("{:>3}: {e}", algorithm.label()),
        }
    }
}
