use crate::cell::CellIndex;
use crate::{C, D, E};
use smallvec::SmallVec;

/// Step cost of a four-directional move.
pub const UNIT_COST: i32 = 1;

/// The set of neighbour directions and their per-step costs. The heuristic used during search
/// is derived from the same variant, so the two can never be on different scales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementModel {
    /// Four orthogonal neighbours with a uniform step cost of [UNIT_COST].
    #[default]
    FourDirectional,
    /// All eight neighbours; [C] for orthogonal and [D] for diagonal steps.
    EightDirectional,
}

impl MovementModel {
    pub fn allows_diagonal(&self) -> bool {
        matches!(self, MovementModel::EightDirectional)
    }

    /// Cost of a single orthogonal step.
    pub fn cardinal_cost(&self) -> i32 {
        match self {
            MovementModel::FourDirectional => UNIT_COST,
            MovementModel::EightDirectional => C,
        }
    }

    /// Candidate neighbours of `cell`, without any walkability filtering.
    pub fn neighborhood(&self, cell: &CellIndex) -> SmallVec<[CellIndex; 8]> {
        match self {
            MovementModel::FourDirectional => cell.neumann_neighborhood(),
            MovementModel::EightDirectional => cell.moore_neighborhood(),
        }
    }

    /// Cost of moving between two adjacent cells, or [None] if this model has no such move.
    pub fn step_cost(&self, from: &CellIndex, to: &CellIndex) -> Option<i32> {
        if !from.is_adjacent(to) {
            return None;
        }
        match (self, from.is_diagonal_to(to)) {
            (MovementModel::FourDirectional, false) => Some(UNIT_COST),
            (MovementModel::FourDirectional, true) => None,
            (MovementModel::EightDirectional, false) => Some(C),
            (MovementModel::EightDirectional, true) => Some(D),
        }
    }

    /// Cost of the cheapest obstacle-free route between `a` and `b` under this model. Used as
    /// the A* heuristic: scaled Manhattan distance for four-directional movement and the
    /// diagonal-aware `D·min(dx,dy) + C·|dx−dy|` for eight-directional movement.
    ///
    /// Computed in `i64` so that any pair of `i32` indices yields an exact result.
    pub fn distance(&self, a: &CellIndex, b: &CellIndex) -> i64 {
        let (dx, dy) = a.abs_diff(b);
        let (delta_x, delta_y) = (i64::from(dx), i64::from(dy));
        match self {
            MovementModel::FourDirectional => (delta_x + delta_y) * i64::from(UNIT_COST),
            MovementModel::EightDirectional => {
                let (d, e) = (i64::from(D), i64::from(E));
                // Formula from https://github.com/riscy/a_star_on_grids
                // to efficiently compute the cost of a path taking the maximal amount
                // of diagonal steps before going straight
                (e * (delta_x - delta_y).abs() + d * (delta_x + delta_y)) / 2
            }
        }
    }
}

/// Settings shared by every solver.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub movement: MovementModel,
    /// Add the destination cell's own cost on top of the step cost.
    pub cell_costs: bool,
    /// Allow diagonal steps past a blocked orthogonal cell.
    pub corner_cutting: bool,
    /// Give up (returning no path) after expanding this many cells.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            movement: MovementModel::FourDirectional,
            cell_costs: true,
            corner_cutting: true,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    pub fn new(movement: MovementModel) -> SearchConfig {
        SearchConfig {
            movement,
            ..SearchConfig::default()
        }
    }

    pub fn with_cell_costs(mut self, cell_costs: bool) -> Self {
        self.cell_costs = cell_costs;
        self
    }

    pub fn with_corner_cutting(mut self, corner_cutting: bool) -> Self {
        self.corner_cutting = corner_cutting;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODELS: [MovementModel; 2] = [
        MovementModel::FourDirectional,
        MovementModel::EightDirectional,
    ];

    #[test]
    fn eight_directional_distances() {
        let m = MovementModel::EightDirectional;
        let o = CellIndex::new(0, 0);
        assert_eq!(m.distance(&o, &CellIndex::new(3, 0)), 30);
        assert_eq!(m.distance(&o, &CellIndex::new(3, 3)), 42);
        assert_eq!(m.distance(&o, &CellIndex::new(-2, 1)), 24);
    }

    #[test]
    fn four_directional_distance_is_manhattan() {
        let m = MovementModel::FourDirectional;
        assert_eq!(m.distance(&CellIndex::new(0, 0), &CellIndex::new(4, 4)), 8);
        assert_eq!(m.distance(&CellIndex::new(1, -1), &CellIndex::new(-2, 3)), 7);
    }

    #[test]
    fn distance_spans_whole_index_range() {
        let a = CellIndex::new(i32::MAX, 0);
        let b = CellIndex::new(i32::MIN, 0);
        let span = i64::from(u32::MAX);
        assert_eq!(MovementModel::FourDirectional.distance(&a, &b), span);
        assert_eq!(MovementModel::EightDirectional.distance(&a, &b), span * 10);
        let corner = CellIndex::new(i32::MIN, i32::MIN);
        let far = CellIndex::new(i32::MAX, i32::MAX);
        assert_eq!(MovementModel::EightDirectional.distance(&corner, &far), span * 14);
    }

    #[test]
    fn step_costs_follow_model() {
        let o = CellIndex::new(0, 0);
        let four = MovementModel::FourDirectional;
        let eight = MovementModel::EightDirectional;
        assert_eq!(four.step_cost(&o, &CellIndex::new(1, 0)), Some(1));
        assert_eq!(four.step_cost(&o, &CellIndex::new(1, 1)), None);
        assert_eq!(eight.step_cost(&o, &CellIndex::new(0, -1)), Some(10));
        assert_eq!(eight.step_cost(&o, &CellIndex::new(-1, 1)), Some(14));
        assert_eq!(eight.step_cost(&o, &CellIndex::new(2, 0)), None);
        assert_eq!(eight.step_cost(&o, &o), None);
    }

    /// The heuristic of every model is consistent with its own step costs: it never drops by
    /// more than the cost of the step taken, and it is zero at the goal.
    #[test]
    fn heuristic_consistent_with_own_steps() {
        let goal = CellIndex::new(3, -2);
        for m in MODELS {
            assert_eq!(m.distance(&goal, &goal), 0);
            for i in -4..=6 {
                for j in -5..=3 {
                    let a = CellIndex::new(i, j);
                    for b in m.neighborhood(&a) {
                        let step = i64::from(m.step_cost(&a, &b).unwrap());
                        assert!(m.distance(&a, &goal) <= step + m.distance(&b, &goal));
                    }
                }
            }
        }
    }

    /// Pairing the eight-directional heuristic with four-directional unit steps overestimates,
    /// which is exactly the contract violation the model-derived heuristic rules out.
    #[test]
    fn mismatched_heuristic_scale_is_inadmissible() {
        let four = MovementModel::FourDirectional;
        let eight = MovementModel::EightDirectional;
        let a = CellIndex::new(0, 0);
        let b = CellIndex::new(1, 0);
        assert!(eight.distance(&a, &b) > i64::from(four.step_cost(&a, &b).unwrap()));
    }
}
