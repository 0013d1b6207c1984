use std::fmt;
use std::str::FromStr;

/// A direction to tilt the board toward.
///
/// Each side doubles as a viewing perspective: seen from `side`, logical
/// "north" (increasing row) points toward that side of the physical board.
/// This lets a single north-tilt routine serve all four directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    // (col0, row0, dcol, drow): origin corner flags and the physical step
    // taken when the logical row increases.
    #[inline]
    fn params(self) -> (usize, usize, isize, isize) {
        match self {
            Side::North => (0, 0, 0, 1),
            Side::East => (0, 1, 1, 0),
            Side::South => (1, 1, 0, -1),
            Side::West => (1, 0, -1, 0),
        }
    }

    /// Physical column of logical `(col, row)` viewed from this side.
    #[inline]
    pub fn col(self, col: usize, row: usize, size: usize) -> usize {
        let (col0, _, dcol, drow) = self.params();
        let last = (size - 1) as isize;
        let c = col0 as isize * last + col as isize * drow + row as isize * dcol;
        c as usize
    }

    /// Physical row of logical `(col, row)` viewed from this side.
    #[inline]
    pub fn row(self, col: usize, row: usize, size: usize) -> usize {
        let (_, row0, dcol, drow) = self.params();
        let last = (size - 1) as isize;
        let r = row0 as isize * last - col as isize * dcol + row as isize * drow;
        r as usize
    }

    /// The side whose transform undoes this one.
    pub fn inverse(self) -> Side {
        match self {
            Side::North => Side::North,
            Side::South => Side::South,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        };
        f.write_str(s)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown direction: {0:?}")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" | "up" => Ok(Side::North),
            "e" | "east" | "right" => Ok(Side::East),
            "s" | "south" | "down" => Ok(Side::South),
            "w" | "west" | "left" => Ok(Side::West),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}
