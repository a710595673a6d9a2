use core::fmt;
use smallvec::{smallvec, SmallVec};
use std::ops::{Add, Sub};

/// Identifies a grid cell by column `i` and row `j`. Indices are signed so that speculative
/// positions (off the edge of the map, under a cursor) can be expressed and queried safely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex {
    pub i: i32,
    pub j: i32,
}

/// Offsets of the 4-neighbourhood, in the order right, up, left, down.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Offsets of the 8-neighbourhood, counter-clockwise starting from the right.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl CellIndex {
    pub const fn new(i: i32, j: i32) -> CellIndex {
        CellIndex { i, j }
    }

    /// Absolute coordinate differences `(dx, dy)`, exact over the whole `i32` range.
    pub fn abs_diff(&self, other: &CellIndex) -> (u32, u32) {
        (self.i.abs_diff(other.i), self.j.abs_diff(other.j))
    }

    pub fn manhattan_distance(&self, other: &CellIndex) -> u64 {
        let (dx, dy) = self.abs_diff(other);
        dx as u64 + dy as u64
    }

    /// Number of king moves needed to go from `self` to `other`.
    pub fn move_distance(&self, other: &CellIndex) -> u32 {
        let (dx, dy) = self.abs_diff(other);
        dx.max(dy)
    }

    /// Cell at the given offset, or [None] if it falls outside the `i32` index space.
    pub fn offset(&self, di: i32, dj: i32) -> Option<CellIndex> {
        Some(CellIndex::new(
            self.i.checked_add(di)?,
            self.j.checked_add(dj)?,
        ))
    }

    /// Orthogonal neighbours; offsets that would leave the index space are dropped.
    pub fn neumann_neighborhood(&self) -> SmallVec<[CellIndex; 8]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(di, dj)| self.offset(di, dj))
            .collect()
    }

    pub fn moore_neighborhood(&self) -> SmallVec<[CellIndex; 8]> {
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(di, dj)| self.offset(di, dj))
            .collect()
    }

    /// Unit step (each component in `-1..=1`) pointing from `self` towards `other`.
    pub fn dir(&self, other: &CellIndex) -> CellIndex {
        CellIndex::new(other.i.cmp(&self.i) as i32, other.j.cmp(&self.j) as i32)
    }

    /// Whether `other` is one king move away.
    pub fn is_adjacent(&self, other: &CellIndex) -> bool {
        self.move_distance(other) == 1
    }

    /// Whether the step from `self` to an adjacent `other` changes both coordinates.
    pub fn is_diagonal_to(&self, other: &CellIndex) -> bool {
        self.i != other.i && self.j != other.j
    }

    /// The two orthogonal cells flanking a diagonal step, which corner cutting would skip past.
    pub(crate) fn flanking(&self, other: &CellIndex) -> SmallVec<[CellIndex; 2]> {
        smallvec![
            CellIndex::new(other.i, self.j),
            CellIndex::new(self.i, other.j)
        ]
    }
}

impl From<(i32, i32)> for CellIndex {
    fn from((i, j): (i32, i32)) -> Self {
        CellIndex::new(i, j)
    }
}

impl Add for CellIndex {
    type Output = CellIndex;
    fn add(self, rhs: CellIndex) -> CellIndex {
        CellIndex::new(self.i + rhs.i, self.j + rhs.j)
    }
}

impl Sub for CellIndex {
    type Output = CellIndex;
    fn sub(self, rhs: CellIndex) -> CellIndex {
        CellIndex::new(self.i - rhs.i, self.j - rhs.j)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}
