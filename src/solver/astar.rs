use crate::cell::CellIndex;
use crate::movement::{MovementModel, SearchConfig};
use crate::solver::GridSolver;

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub config: SearchConfig,
    /// Multiplier on the movement model's distance. At 1.0 the heuristic is consistent and
    /// paths are minimal; larger values expand fewer cells but may return costlier paths.
    pub heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new(movement: MovementModel) -> AstarSolver {
        AstarSolver::with_config(SearchConfig::new(movement))
    }

    pub fn with_config(config: SearchConfig) -> AstarSolver {
        AstarSolver {
            config,
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::with_config(SearchConfig::default())
    }
}

impl GridSolver for AstarSolver {
    fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Just the movement model's obstacle-free distance times the heuristic factor.
    fn heuristic(&self, p1: &CellIndex, p2: &CellIndex) -> f64 {
        self.config.movement.distance(p1, p2) as f64 * self.heuristic_factor
    }
}
