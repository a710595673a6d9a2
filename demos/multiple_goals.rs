use tile_pathfinding::{AstarSolver, CellIndex, GridSolver, MovementModel, PathGrid};

// In this example a path is found to one of two goals on a 3x3 grid with shape
//  ___
// |S G|
// | # |
// |  G|
//  ___
// where
// - \# marks an obstacle
// - S marks the start
// - G marks a goal
// The found path moves to the closest goal, which is the top one.

fn main() {
    let mut pathing_grid = PathGrid::with_size(3, 3).unwrap();
    pathing_grid.set_walkable(CellIndex::new(1, 1), false);
    println!("{}", pathing_grid);
    let solver = AstarSolver::new(MovementModel::EightDirectional);
    let start = CellIndex::new(0, 0);
    let goals = [CellIndex::new(2, 0), CellIndex::new(2, 2)];
    let (selected_goal, path) = solver
        .find_path_multiple_goals(&pathing_grid, start, &goals)
        .unwrap();
    println!("Selected goal: {}\n", selected_goal);
    println!("Path:");
    for p in &path {
        println!("{}", p);
    }
}
