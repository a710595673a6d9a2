use crate::cell::CellIndex;
use crate::movement::SearchConfig;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use itertools::iproduct;
use log::debug;
use smallvec::SmallVec;
use thiserror::Error;

/// Per-cell attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileData {
    pub walkable: bool,
    /// Surcharge for entering the cell. Never negative once stored in a [PathGrid];
    /// [f32::INFINITY] blocks the cell regardless of `walkable`.
    pub cost: f32,
    /// Opaque region tag, not interpreted by the search.
    pub area_id: i32,
}

impl TileData {
    /// What every in-bounds cell holds after [PathGrid::initialize].
    pub const DEFAULT: TileData = TileData {
        walkable: true,
        cost: 0.0,
        area_id: 0,
    };
    /// What every query outside the grid resolves to.
    pub const OUT_OF_BOUNDS: TileData = TileData {
        walkable: false,
        cost: f32::INFINITY,
        area_id: -1,
    };

    pub fn new(walkable: bool, cost: f32, area_id: i32) -> TileData {
        TileData {
            walkable,
            cost: clamp_cost(cost),
            area_id,
        }
    }

    /// Both the flag and a finite cost are required to enter a cell.
    pub fn is_passable(&self) -> bool {
        self.walkable && self.cost.is_finite()
    }
}

impl Default for TileData {
    fn default() -> Self {
        TileData::DEFAULT
    }
}

/// Negative costs would allow negative-cost cycles; NaN is mapped to zero as well.
fn clamp_cost(cost: f32) -> f32 {
    cost.max(0.0)
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridConfigError {
    #[error("grid width must be positive, got {0}")]
    NonPositiveWidth(i32),
    #[error("grid height must be positive, got {0}")]
    NonPositiveHeight(i32),
}

/// Extents of the index space. Validated once on construction and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i32, i32)", into = "(i32, i32)"))]
pub struct GridConfig {
    width: i32,
    height: i32,
}

impl GridConfig {
    pub fn new(width: i32, height: i32) -> Result<GridConfig, GridConfigError> {
        if width <= 0 {
            return Err(GridConfigError::NonPositiveWidth(width));
        }
        if height <= 0 {
            return Err(GridConfigError::NonPositiveHeight(height));
        }
        Ok(GridConfig { width, height })
    }
    pub fn width(&self) -> usize {
        self.width as usize
    }
    pub fn height(&self) -> usize {
        self.height as usize
    }
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }
    pub fn contains(&self, c: CellIndex) -> bool {
        c.i >= 0 && c.i < self.width && c.j >= 0 && c.j < self.height
    }
    /// Dense index of an in-bounds cell, rows laid out one after another.
    pub(crate) fn index_of(&self, c: CellIndex) -> Option<usize> {
        self.contains(c)
            .then(|| c.j as usize * self.width() + c.i as usize)
    }
}

impl TryFrom<(i32, i32)> for GridConfig {
    type Error = GridConfigError;
    fn try_from((width, height): (i32, i32)) -> Result<Self, Self::Error> {
        GridConfig::new(width, height)
    }
}

impl From<GridConfig> for (i32, i32) {
    fn from(config: GridConfig) -> Self {
        (config.width, config.height)
    }
}

/// [PathGrid] is the authoritative store of walkability, cost and region per cell. All reads
/// are bounds-safe: indices outside the grid resolve to [TileData::OUT_OF_BOUNDS] and writes to
/// them are ignored, so callers can query speculative positions without validating them first.
///
/// The grid holds no search state; any number of searches may read it at once.
#[derive(Clone, Debug, PartialEq)]
pub struct PathGrid {
    config: GridConfig,
    tiles: Vec<TileData>,
}

impl PathGrid {
    pub fn new(config: GridConfig) -> PathGrid {
        let mut grid = PathGrid {
            config,
            tiles: Vec::new(),
        };
        grid.initialize(config);
        grid
    }

    /// Shorthand for validating a [GridConfig] and building a grid from it.
    pub fn with_size(width: i32, height: i32) -> Result<PathGrid, GridConfigError> {
        GridConfig::new(width, height).map(PathGrid::new)
    }

    /// Replaces all state with a fresh grid of default tiles.
    pub fn initialize(&mut self, config: GridConfig) {
        debug!("Initializing {}x{} grid", config.width(), config.height());
        self.config = config;
        self.tiles = vec![TileData::DEFAULT; config.cell_count()];
    }

    /// Resets every tile to [TileData::DEFAULT], keeping the extents.
    pub fn clear_to_defaults(&mut self) {
        self.tiles.fill(TileData::DEFAULT);
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }
    pub fn width(&self) -> usize {
        self.config.width()
    }
    pub fn height(&self) -> usize {
        self.config.height()
    }

    pub fn in_bounds(&self, c: CellIndex) -> bool {
        self.config.contains(c)
    }

    fn get_ix(&self, c: CellIndex) -> Option<usize> {
        self.config.index_of(c)
    }

    pub fn tile(&self, c: CellIndex) -> Option<&TileData> {
        let ix = self.get_ix(c)?;
        self.tiles.get(ix)
    }

    fn tile_mut(&mut self, c: CellIndex) -> Option<&mut TileData> {
        let ix = self.get_ix(c)?;
        self.tiles.get_mut(ix)
    }

    pub fn is_walkable(&self, c: CellIndex) -> bool {
        self.tile(c).map_or(false, |t| t.walkable)
    }
    pub fn cost(&self, c: CellIndex) -> f32 {
        self.tile(c).map_or(f32::INFINITY, |t| t.cost)
    }
    pub fn area(&self, c: CellIndex) -> i32 {
        self.tile(c).map_or(-1, |t| t.area_id)
    }
    /// Whether a path may enter `c`.
    pub fn is_passable(&self, c: CellIndex) -> bool {
        self.tile(c).map_or(false, TileData::is_passable)
    }

    pub fn set_walkable(&mut self, c: CellIndex, value: bool) {
        if let Some(t) = self.tile_mut(c) {
            t.walkable = value;
        }
    }
    pub fn set_cost(&mut self, c: CellIndex, value: f32) {
        if let Some(t) = self.tile_mut(c) {
            t.cost = clamp_cost(value);
        }
    }
    pub fn set_area(&mut self, c: CellIndex, id: i32) {
        if let Some(t) = self.tile_mut(c) {
            t.area_id = id;
        }
    }
    pub fn set_tile(&mut self, c: CellIndex, data: TileData) {
        if let Some(t) = self.tile_mut(c) {
            *t = TileData::new(data.walkable, data.cost, data.area_id);
        }
    }

    pub fn count_walkable(&self) -> usize {
        self.tiles.iter().filter(|t| t.walkable).count()
    }

    /// Bounds-safe copy of the tile at `(i, j)`, for inspection and debugging.
    pub fn sample(&self, i: i32, j: i32) -> TileData {
        self.tile(CellIndex::new(i, j))
            .copied()
            .unwrap_or(TileData::OUT_OF_BOUNDS)
    }

    /// All in-bounds cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        iproduct!(0..self.config.height, 0..self.config.width).map(|(j, i)| CellIndex::new(i, j))
    }

    /// Whether a single step from `start` to the adjacent `pos` is allowed. Without corner
    /// cutting, a diagonal step additionally needs both flanking orthogonal cells passable.
    pub fn can_move_to(&self, pos: CellIndex, start: CellIndex, config: &SearchConfig) -> bool {
        if !self.is_passable(pos) {
            return false;
        }
        if config.corner_cutting || !start.is_diagonal_to(&pos) {
            return true;
        }
        debug_assert!(start.is_adjacent(&pos));
        start
            .flanking(&pos)
            .iter()
            .all(|&flank| self.is_passable(flank))
    }

    /// Price of entering `pos` with a step of the given movement-model cost.
    pub(crate) fn entry_cost(&self, pos: CellIndex, step: i32, config: &SearchConfig) -> f64 {
        if config.cell_costs {
            step as f64 + self.cost(pos) as f64
        } else {
            step as f64
        }
    }

    /// Enterable neighbours of `pos` together with the full cost of stepping onto them.
    pub fn neighborhood_points_and_cost(
        &self,
        pos: &CellIndex,
        config: &SearchConfig,
    ) -> SmallVec<[(CellIndex, f64); N_SMALLVEC_SIZE]> {
        config
            .movement
            .neighborhood(pos)
            .into_iter()
            .filter(|p| self.can_move_to(*p, *pos, config))
            .filter_map(|p| {
                config
                    .movement
                    .step_cost(pos, &p)
                    .map(|step| (p, self.entry_cost(p, step, config)))
            })
            .collect()
    }
}

impl fmt::Display for PathGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for j in 0..self.config.height {
            let row = (0..self.config.width)
                .map(|i| {
                    let t = self.sample(i, j);
                    if !t.is_passable() {
                        '#'
                    } else if t.cost > 0.0 {
                        '+'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
