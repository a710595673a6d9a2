use tile_pathfinding::{AstarSolver, CellIndex, GridSolver, MovementModel, PathGrid, SearchConfig};

// In this example a path is found across an 8x5 map with a muddy band in the middle.
// Digits mark walkable cells with that surcharge on entry, so the path walks around the
// expensive cells where the detour is cheaper than wading through.
//
// Cells have an 8-neighborhood, diagonal steps cost 14 and straight steps 10.

const MAP: &str = "
S.......
..#99#..
..#55#..
..#11#..
.......G
";

fn main() {
    let pathing_grid = PathGrid::from_ascii(MAP).unwrap();
    println!("{}", pathing_grid);
    let start = CellIndex::new(0, 0);
    let end = CellIndex::new(7, 4);
    for corner_cutting in [true, false] {
        let config = SearchConfig::new(MovementModel::EightDirectional)
            .with_corner_cutting(corner_cutting);
        let solver = AstarSolver::with_config(config);
        let path = solver.find_path(&pathing_grid, start, end).unwrap();
        println!("Corner cutting: {corner_cutting}");
        println!("Waypoints:");
        for p in path.waypoints() {
            println!("{}", p);
        }
        println!("Cost: {}\n", path.total_cost());
    }
}
