use crate::cell::CellIndex;
use crate::components::Components;
use crate::grid::PathGrid;
use crate::movement::SearchConfig;
use crate::path::Path;
use crate::search::astar;
use crate::N_SMALLVEC_SIZE;
use log::{info, warn};
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

/// A search strategy over a [PathGrid]. Implementors supply the settings and a heuristic; the
/// search loop, neighbour generation and path pricing are shared.
///
/// Solvers only ever borrow the grid immutably and keep all search state local to a call, so a
/// single grid can serve any number of concurrent searches.
pub trait GridSolver {
    fn config(&self) -> &SearchConfig;

    /// Estimated remaining cost from `p1` to `p2`. Must not overestimate the true cost for the
    /// returned paths to be minimal.
    fn heuristic(&self, p1: &CellIndex, p2: &CellIndex) -> f64;

    fn successors(
        &self,
        grid: &PathGrid,
        node: &CellIndex,
    ) -> SmallVec<[(CellIndex, f64); N_SMALLVEC_SIZE]> {
        grid.neighborhood_points_and_cost(node, self.config())
    }

    /// Cost of a single step between adjacent cells, including the surcharge of `p2` when cell
    /// costs are enabled. [None] if the step is not allowed.
    fn cost(&self, grid: &PathGrid, p1: &CellIndex, p2: &CellIndex) -> Option<f64> {
        let config = self.config();
        if !grid.can_move_to(*p2, *p1, config) {
            return None;
        }
        config
            .movement
            .step_cost(p1, p2)
            .map(|step| grid.entry_cost(*p2, step, config))
    }

    /// Prices a sequence of cells step by step. [None] if any step is not allowed.
    fn get_path_cost(&self, grid: &PathGrid, path: &[CellIndex]) -> Option<f64> {
        path.windows(2)
            .map(|w| self.cost(grid, &w[0], &w[1]))
            .sum()
    }

    /// Computes a minimum-cost path from start to goal, or [None] if no route exists.
    ///
    /// Neither endpoint is checked for walkability: a blocked start is simply left, a blocked
    /// goal is never entered. When `start == goal` the single-cell path is returned without
    /// searching.
    fn find_path(&self, grid: &PathGrid, start: CellIndex, goal: CellIndex) -> Option<Path> {
        if start == goal {
            return Some(Path::trivial(start));
        }
        astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
            self.config().max_expansions,
        )
        .map(|(cells, costs)| Path::new(cells, costs))
    }

    /// Like [find_path](Self::find_path), but first consults a component snapshot so that an
    /// unreachable goal is rejected without searching. Impassable starts belong to no component
    /// and skip the check, so both entry points give the same answer.
    fn find_path_with_components(
        &self,
        grid: &PathGrid,
        components: &Components,
        start: CellIndex,
        goal: CellIndex,
    ) -> Option<Path> {
        // Check if start and goal are on the same connected component.
        let checked = grid.is_passable(start);
        if checked && components.unreachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return None;
        }
        let path = self.find_path(grid, start, goal);
        if checked && path.is_none() {
            warn!(
                "Reachable goal {} could not be pathed to from {}, is the component snapshot stale?",
                goal, start
            );
        }
        path
    }

    /// Computes a path from the start to the cheapest of the given goals and returns the selected
    /// goal in addition to the found path. Otherwise behaves similar to
    /// [find_path](Self::find_path).
    fn find_path_multiple_goals(
        &self,
        grid: &PathGrid,
        start: CellIndex,
        goals: &[CellIndex],
    ) -> Option<(CellIndex, Path)> {
        if goals.is_empty() {
            return None;
        }
        if goals.contains(&start) {
            return Some((start, Path::trivial(start)));
        }
        astar(
            &start,
            |node| self.successors(grid, node),
            |point| {
                goals
                    .iter()
                    .map(|goal| self.heuristic(point, goal))
                    .fold(f64::INFINITY, f64::min)
            },
            |point| goals.contains(point),
            self.config().max_expansions,
        )
        .map(|(cells, costs)| {
            let path = Path::new(cells, costs);
            (path.goal(), path)
        })
    }
}
