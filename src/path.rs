use crate::cell::CellIndex;
use std::collections::VecDeque;
use std::ops::Index;

/// An ordered route from start to goal, both inclusive, together with the accumulated cost at
/// every cell along it. Consecutive cells are always adjacent under the movement model the path
/// was found with.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    cells: Vec<CellIndex>,
    costs: Vec<f64>,
}

impl Path {
    pub(crate) fn new(cells: Vec<CellIndex>, costs: Vec<f64>) -> Path {
        debug_assert_eq!(cells.len(), costs.len());
        Path { cells, costs }
    }

    /// The single-cell path of a search whose start is its goal.
    pub fn trivial(cell: CellIndex) -> Path {
        Path::new(vec![cell], vec![0.0])
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    /// Accumulated cost from the start at each cell; non-decreasing and `0` at the start.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn start(&self) -> CellIndex {
        self.cells[0]
    }

    pub fn goal(&self) -> CellIndex {
        self.cells[self.cells.len() - 1]
    }

    pub fn total_cost(&self) -> f64 {
        self.costs[self.costs.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CellIndex> {
        self.cells.iter()
    }

    /// The cells at which the direction of travel changes, plus both endpoints. Feeding these to
    /// [waypoints_to_path] gives back the original cells.
    pub fn waypoints(&self) -> Vec<CellIndex> {
        let mut waypoints = vec![self.start()];
        for window in self.cells.windows(3) {
            let (a, b, c) = (window[0], window[1], window[2]);
            if a.dir(&b) != b.dir(&c) {
                waypoints.push(b);
            }
        }
        if self.len() > 1 {
            waypoints.push(self.goal());
        }
        waypoints
    }
}

impl Index<usize> for Path {
    type Output = CellIndex;
    fn index(&self, index: usize) -> &CellIndex {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a CellIndex;
    type IntoIter = std::slice::Iter<'a, CellIndex>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl From<Path> for Vec<CellIndex> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

/// Turns waypoints into a path on the grid which can be followed step by step. Each leg is
/// walked with king moves, so legs between waypoints produced by [Path::waypoints] (which are
/// straight or diagonal lines) are reproduced exactly.
pub fn waypoints_to_path(waypoints: Vec<CellIndex>) -> Vec<CellIndex> {
    let mut waypoint_queue = waypoints.into_iter().collect::<VecDeque<CellIndex>>();
    let mut path: Vec<CellIndex> = Vec::new();
    let Some(mut current) = waypoint_queue.pop_front() else {
        return path;
    };
    path.push(current);
    for next in waypoint_queue {
        while current.move_distance(&next) >= 1 {
            let delta = current.dir(&next);
            current = current + delta;
            path.push(current);
        }
    }
    path
}
