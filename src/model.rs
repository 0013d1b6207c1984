use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, info, trace};
use rand::Rng;

use crate::config::GameConfig;
use crate::engine::{compact_column, rules, Board, ColumnShift, Score, Side, Tile};
use crate::error::EngineError;

/// The state of a game of 2048: board, score and terminal status.
///
/// All mutation goes through [`Model::add_tile`], [`Model::add_random_tile`],
/// [`Model::tilt`] and [`Model::clear`]. Each of them leaves `game_over`
/// consistent with the board. Instead of notifying observers, the model
/// raises a dirty flag that callers poll with [`Model::take_changed`].
///
/// ```
/// use tilt_2048::{Model, Side};
/// let mut m = Model::from_values(&[
///     vec![0, 0, 0, 0],
///     vec![0, 0, 0, 0],
///     vec![2, 0, 0, 0],
///     vec![2, 0, 0, 0],
/// ], 0, 0).unwrap();
/// assert!(m.tilt(Side::North));
/// assert_eq!(m.tile(0, 3).map(|t| t.value()), Some(4));
/// assert_eq!(m.score(), 4);
/// ```
#[derive(Clone)]
pub struct Model {
    board: Board,
    score: Score,
    /// High-water mark, only raised when the game is found to be over.
    max_score: Score,
    game_over: bool,
    config: GameConfig,
    changed: bool,
}

impl Model {
    /// An empty game on a `size x size` board with the default max piece.
    ///
    /// Panics if `size < 2`; use [`Model::with_config`] to validate instead.
    pub fn new(size: usize) -> Self {
        let config = GameConfig::with_size(size);
        assert!(config.validate().is_ok(), "board size must be at least 2, got {size}");
        Self::empty(config)
    }

    /// An empty game for a validated `config`.
    pub fn with_config(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: GameConfig) -> Self {
        Model {
            board: Board::new(config.size),
            score: 0,
            max_score: 0,
            game_over: false,
            config,
            changed: false,
        }
    }

    /// A game whose tiles come from `raw` (top row first, `0` = empty).
    ///
    /// The board size is the number of rows; the max piece is the default.
    /// Game-over status is derived from the layout.
    pub fn from_values(raw: &[Vec<u32>], score: Score, max_score: Score) -> Result<Self, EngineError> {
        let config = GameConfig::with_size(raw.len());
        config.validate()?;
        let board = Board::from_values(raw)?;
        let mut model = Model {
            board,
            score,
            max_score,
            game_over: false,
            config,
            changed: false,
        };
        model.check_game_over();
        Ok(model)
    }

    /// Tile at `(col, row)`, `(0, 0)` being the lower-left corner.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.board.tile(col, row)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True iff the max piece is on the board or no tilt can change it.
    #[inline]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Best score seen at the end of a game.
    #[inline]
    pub fn max_score(&self) -> Score {
        self.max_score
    }

    /// Return and reset the dirty flag raised by any state change.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Whether the state changed since the last [`Model::take_changed`].
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Empty the board and reset score and game-over. Max score is kept.
    pub fn clear(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.board.clear();
        self.changed = true;
    }

    /// Add `tile` to the board. Its cell must be empty.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), EngineError> {
        self.board.add_tile(tile)?;
        self.check_game_over();
        self.changed = true;
        Ok(())
    }

    /// Spawn a 2 (90%) or 4 (10%) in a random empty cell.
    ///
    /// Returns the new tile, or `None` when the board is full.
    pub fn add_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        let size = self.size();
        let empty: Vec<(usize, usize)> = (0..size)
            .flat_map(|row| (0..size).map(move |col| (col, row)))
            .filter(|&(col, row)| self.board.tile(col, row).is_none())
            .collect();
        if empty.is_empty() {
            return None;
        }
        let (col, row) = empty[rng.gen_range(0..empty.len())];
        let value = if rng.gen_range(0..10) < 9 { 2 } else { 4 };
        let tile = Tile::create(value, col, row);
        self.add_tile(tile).expect("spawn cell was listed as empty");
        Some(tile)
    }

    /// Slide every tile toward `side`, merging equal neighbours once.
    ///
    /// Returns whether any tile moved or merged. Merged values are added to
    /// the score. See [`compact_column`] for the merge order. Every column's
    /// result is computed before any of them is written back.
    pub fn tilt(&mut self, side: Side) -> bool {
        let size = self.size();
        self.board.set_viewing_perspective(side);
        let shifts: Vec<ColumnShift> = (0..size)
            .map(|col| compact_column(&self.board.column(col), size))
            .collect();

        let changed = shifts.iter().any(|s| s.changed);
        let gained: Score = shifts.iter().map(|s| s.score).sum();
        if changed {
            for (col, shift) in shifts.iter().enumerate().filter(|(_, s)| s.changed) {
                trace!("tilt {side}: column {col} -> {} tiles, +{}", shift.resting.len(), shift.score);
                self.board.set_column(col, &shift.resting);
            }
            self.score += gained;
            self.changed = true;
        }
        self.board.set_viewing_perspective(Side::North);

        self.check_game_over();
        debug!("tilt {side}: changed={changed} gained={gained} score={}", self.score);
        changed
    }

    fn check_game_over(&mut self) {
        let over = rules::is_game_over(&self.board, self.config.max_piece);
        if over {
            if !self.game_over {
                info!("game over: score={} highest={}", self.score, self.board.highest_tile());
            }
            self.max_score = self.max_score.max(self.score);
        }
        self.game_over = over;
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::empty(GameConfig::default())
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.score == other.score
            && self.max_score == other.max_score
            && self.game_over == other.game_over
    }
}

impl Eq for Model {}

impl Hash for Model {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
        self.score.hash(state);
        self.max_score.hash(state);
        self.game_over.hash(state);
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n[\n{}", self.board)?;
        let over = if self.game_over { "over" } else { "not over" };
        writeln!(
            f,
            "] {} (max: {}) (game is {}) ",
            self.score, self.max_score, over
        )
    }
}
