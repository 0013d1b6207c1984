use std::fmt;

use super::side::Side;
use super::tile::Tile;
use crate::error::EngineError;

/// Square grid of optional tiles with a switchable viewing perspective.
///
/// Coordinates passed to and returned from the public methods are logical,
/// i.e. relative to the current perspective; with the default `Side::North`
/// they equal physical coordinates, `(0, 0)` being the lower-left cell.
/// Stored tiles always carry their physical coordinates.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Tile>>,
    viewing: Side,
}

impl Board {
    /// An empty `size x size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![None; size * size],
            viewing: Side::North,
        }
    }

    /// Build a board from raw values, top row first, `0` meaning empty.
    ///
    /// ```
    /// use tilt_2048::engine::Board;
    /// let b = Board::from_values(&[
    ///     vec![0, 0, 0, 2],
    ///     vec![0, 0, 0, 0],
    ///     vec![0, 0, 0, 0],
    ///     vec![4, 0, 0, 0],
    /// ]).unwrap();
    /// assert_eq!(b.tile(3, 3).map(|t| t.value()), Some(2));
    /// assert_eq!(b.tile(0, 0).map(|t| t.value()), Some(4));
    /// ```
    pub fn from_values(raw: &[Vec<u32>]) -> Result<Self, EngineError> {
        let size = raw.len();
        let mut board = Board::new(size);
        for (i, line) in raw.iter().enumerate() {
            if line.len() != size {
                return Err(EngineError::RaggedLayout {
                    expected: size,
                    row: i,
                    found: line.len(),
                });
            }
            let row = size - 1 - i;
            for (col, &value) in line.iter().enumerate() {
                if value != 0 {
                    board.add_tile(Tile::create(value, col, row))?;
                }
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn viewing(&self) -> Side {
        self.viewing
    }

    /// View the board from `side` until the next call.
    pub fn set_viewing_perspective(&mut self, side: Side) {
        self.viewing = side;
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        let pc = self.viewing.col(col, row, self.size);
        let pr = self.viewing.row(col, row, self.size);
        pr * self.size + pc
    }

    fn check_bounds(&self, col: usize, row: usize) -> Result<(), EngineError> {
        if col >= self.size || row >= self.size {
            return Err(EngineError::OutOfBounds {
                col,
                row,
                size: self.size,
            });
        }
        Ok(())
    }

    /// The tile at logical `(col, row)`, re-expressed in logical coordinates.
    ///
    /// Panics if the coordinates are off the board.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        assert!(
            col < self.size && row < self.size,
            "({col}, {row}) outside {0}x{0} board",
            self.size
        );
        self.cells[self.index(col, row)].map(|t| t.moved_to(col, row))
    }

    /// Insert `tile` at its logical position. The cell must be empty.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), EngineError> {
        let (col, row) = (tile.col(), tile.row());
        self.check_bounds(col, row)?;
        if !Tile::is_valid_value(tile.value()) {
            return Err(EngineError::InvalidValue(tile.value()));
        }
        let idx = self.index(col, row);
        if self.cells[idx].is_some() {
            return Err(EngineError::Occupied { col, row });
        }
        let physical = tile.moved_to(idx % self.size, idx / self.size);
        self.cells[idx] = Some(physical);
        Ok(())
    }

    /// Remove every tile and restore the default perspective.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.viewing = Side::North;
    }

    /// Tiles of logical column `col`, from the north edge southward, gaps removed.
    pub fn column(&self, col: usize) -> Vec<Tile> {
        (0..self.size)
            .rev()
            .filter_map(|row| self.tile(col, row))
            .collect()
    }

    /// Replace logical column `col` with `tiles` (logical coordinates).
    pub(crate) fn set_column(&mut self, col: usize, tiles: &[Tile]) {
        for row in 0..self.size {
            let idx = self.index(col, row);
            self.cells[idx] = None;
        }
        for tile in tiles {
            debug_assert_eq!(tile.col(), col);
            let idx = self.index(col, tile.row());
            debug_assert!(self.cells[idx].is_none(), "two tiles resting in one cell");
            self.cells[idx] = Some(tile.moved_to(idx % self.size, idx / self.size));
        }
    }

    /// All tiles in physical coordinates, row-major from the bottom row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }

    /// Count the number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Highest tile value present, `0` on an empty board.
    pub fn highest_tile(&self) -> u32 {
        self.tiles().map(|t| t.value()).max().unwrap_or(0)
    }

    /// Physical lookup, ignoring the perspective.
    #[inline]
    pub(crate) fn physical(&self, col: usize, row: usize) -> Option<Tile> {
        self.cells[row * self.size + col]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{}, viewing {}){}", self.size, self.size, self.viewing, self)
    }
}

/// Rows from the top down, each cell right-aligned in four columns.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                match self.physical(col, row) {
                    Some(t) => write!(f, "|{:4}", t.value())?,
                    None => f.write_str("|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
