use std::fmt;

/// A numbered tile and the cell it sits in.
///
/// Tiles are immutable: moving or merging yields a new `Tile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
}

impl Tile {
    /// Largest value a tile may be created with; merging two of them still fits a `u32`.
    pub const MAX_VALUE: u32 = 1 << 30;

    #[inline]
    pub fn create(value: u32, col: usize, row: usize) -> Self {
        Tile { value, col, row }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Same value at `(col, row)`.
    #[inline]
    pub fn moved_to(self, col: usize, row: usize) -> Self {
        Tile { col, row, ..self }
    }

    /// Twice the value at `(col, row)`; the result of merging with an equal tile.
    #[inline]
    pub fn merged(self, col: usize, row: usize) -> Self {
        Tile {
            value: self.value * 2,
            col,
            row,
        }
    }

    /// True for the values a tile may be created with (2, 4, 8, ... `MAX_VALUE`).
    #[inline]
    pub fn is_valid_value(value: u32) -> bool {
        (2..=Self::MAX_VALUE).contains(&value) && value.is_power_of_two()
    }

    /// Whether this tile may absorb an equal neighbour without overflowing.
    #[inline]
    pub fn can_merge(&self) -> bool {
        self.value.checked_mul(2).is_some()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@({}, {})", self.value, self.col, self.row)
    }
}
