use crate::cell::CellIndex;
use crate::grid::{GridConfig, PathGrid};
use crate::movement::SearchConfig;
use log::info;
use petgraph::unionfind::UnionFind;

/// Connected components of the passable cells of a [PathGrid] under one [SearchConfig]'s
/// movement rules, kept in a [UnionFind] structure. Answers "is there any route at all" in
/// near-constant time, which avoids flood-filling the whole grid in a search that cannot
/// succeed.
///
/// This is a snapshot: it does not follow later edits to the grid and has to be rebuilt after
/// mutating it.
#[derive(Clone, Debug)]
pub struct Components {
    extents: GridConfig,
    passable: Vec<bool>,
    components: UnionFind<usize>,
}

impl Components {
    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn new(grid: &PathGrid, config: &SearchConfig) -> Components {
        let extents = grid.config();
        info!(
            "Generating connected components for {}x{} grid ({:?})",
            extents.width(),
            extents.height(),
            config.movement
        );
        let passable = grid.cells().map(|c| grid.is_passable(c)).collect();
        let mut components = UnionFind::new(extents.cell_count());
        // Only neighbours ahead in scan order; the others link back to a cell themselves.
        let forward: &[(i32, i32)] = if config.movement.allows_diagonal() {
            &[(1, 0), (0, 1), (1, 1), (1, -1)]
        } else {
            &[(1, 0), (0, 1)]
        };
        for point in grid.cells().filter(|&c| grid.is_passable(c)) {
            let Some(parent_ix) = extents.index_of(point) else {
                continue;
            };
            for &(di, dj) in forward {
                let n = CellIndex::new(point.i + di, point.j + dj);
                if grid.can_move_to(n, point, config) {
                    if let Some(ix) = extents.index_of(n) {
                        components.union(parent_ix, ix);
                    }
                }
            }
        }
        Components {
            extents,
            passable,
            components,
        }
    }

    /// Retrieves the component id a given cell belongs to, or [None] for impassable and
    /// out-of-bounds cells.
    pub fn component(&self, c: CellIndex) -> Option<usize> {
        let ix = self.extents.index_of(c)?;
        self.passable[ix].then(|| self.components.find(ix))
    }

    /// Checks if a path from start to goal can exist. A cell is always reachable from itself.
    pub fn reachable(&self, start: CellIndex, goal: CellIndex) -> bool {
        if start == goal {
            return self.extents.contains(start);
        }
        match (self.component(start), self.component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: CellIndex, goal: CellIndex) -> bool {
        !self.reachable(start, goal)
    }
}
