//! Engine module: tiles, the perspective-aware board, the column
//! slide/merge routine and the game-over rules.
//!
//! - `Board` is the square grid; `Side` both names a tilt direction and the
//!   perspective that turns it into a north tilt.
//! - `compact_column` is the one routine every tilt direction runs through.
//! - `rules` holds the pure terminal-condition checks.

mod board;
mod ops;
pub mod rules;
mod side;
mod tile;

pub use board::Board;
pub use ops::{compact_column, shift_line, ColumnShift, Score};
pub use rules::{at_least_one_move_exists, empty_space_exists, is_game_over, max_tile_exists};
pub use side::{ParseSideError, Side};
pub use tile::Tile;
