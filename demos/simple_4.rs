use tile_pathfinding::{AstarSolver, CellIndex, Components, GridSolver, MovementModel, PathGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighborhood

fn main() {
    let mut pathing_grid = PathGrid::with_size(3, 3).unwrap();
    pathing_grid.set_walkable(CellIndex::new(1, 1), false);
    println!("{}", pathing_grid);
    let solver = AstarSolver::new(MovementModel::FourDirectional);
    let components = Components::new(&pathing_grid, &solver.config);
    let start = CellIndex::new(0, 0);
    let end = CellIndex::new(2, 2);
    let path = solver
        .find_path_with_components(&pathing_grid, &components, start, end)
        .unwrap();
    println!("Path:");
    for p in &path {
        println!("{}", p);
    }
    println!("Cost: {}", path.total_cost());
}
