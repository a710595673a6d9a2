//! # tile_pathfinding
//!
//! A grid-based pathfinding system. A [PathGrid] stores walkability, an entry cost and a region
//! tag per cell; [AstarSolver] finds minimum-cost routes over it with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), using either four- or
//! eight-directional movement. Search state is owned by each call, never by the grid, so a grid
//! can be searched from several threads at once as long as nobody mutates it.
//!
//! ```
//! use tile_pathfinding::{AstarSolver, CellIndex, GridSolver, MovementModel, PathGrid};
//!
//! let mut grid = PathGrid::with_size(3, 3).unwrap();
//! grid.set_walkable(CellIndex::new(1, 1), false);
//! let solver = AstarSolver::new(MovementModel::FourDirectional);
//! let path = solver
//!     .find_path(&grid, CellIndex::new(0, 0), CellIndex::new(2, 2))
//!     .unwrap();
//! assert_eq!(path.len(), 5);
//! ```
//!
//! Optionally pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! with [Components] to avoid flood-filling behaviour if no path exists.
pub mod cell;
pub mod components;
pub mod grid;
pub mod map;
pub mod movement;
pub mod path;
mod search;
pub mod solver;

pub use cell::CellIndex;
pub use components::Components;
pub use grid::{GridConfig, GridConfigError, PathGrid, TileData};
pub use map::{MapParseError, TileKind};
pub use movement::{MovementModel, SearchConfig};
pub use path::{waypoints_to_path, Path};
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};

/// Cost of a cardinal (straight) move under eight-directional movement.
pub const C: i32 = 10;
/// Cost of a diagonal move, approximating `C·√2`.
pub const D: i32 = 14;
/// Helper constant for the octile distance, `2C − D`.
pub const E: i32 = 2 * C - D;

/// Inline capacity of successor lists, enough for a full 8-neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;
