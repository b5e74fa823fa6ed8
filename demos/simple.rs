use index_grid_pathfinding::{search, Algorithm, SearchRequest};

// In this example a path is found on a 4x4 grid of linear indices, drawn in the rows the
// neighbour rules step along (see IndexGrid::layout_rows)
//  ____
// |:::S|   -3  -2  -1   0
// |....|    1   2   3   4
// |##..|    5   6   7   8
// |....|    9  10  11  12
// |..E:|   13  14  15  16
//  ____
// where
// - # marks an obstacle
// - : marks a cell outside the grid that a search may still step onto
// - S marks the start
// - E marks the end

fn main() {
    let request = SearchRequest::new(0, 15, 16).with_obstacles([5, 6]);
    match request.grid() {
        Ok(grid) => print!("{}", grid.render(&request.obstacles)),
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    }
    let outcome = search(Algorithm::AStar, &request).unwrap();
    println!("Path:");
    for cell in outcome.cells {
        println!("{}", cell);
    }
}
