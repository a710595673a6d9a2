use crate::cell::CellIndex;
use crate::movement::{MovementModel, SearchConfig};
use crate::solver::GridSolver;

/// Uniform-cost search: A* with a zero heuristic. Expands more cells than [AstarSolver] but
/// serves as the reference for what a minimum-cost path costs.
///
/// [AstarSolver]: crate::solver::astar::AstarSolver
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub config: SearchConfig,
}

impl DijkstraSolver {
    pub fn new(movement: MovementModel) -> DijkstraSolver {
        DijkstraSolver {
            config: SearchConfig::new(movement),
        }
    }
}

impl GridSolver for DijkstraSolver {
    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn heuristic(&self, _: &CellIndex, _: &CellIndex) -> f64 {
        0.0
    }
}
