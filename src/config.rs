use serde::{Deserialize, Serialize};

use crate::engine::Tile;
use crate::error::EngineError;

/// Board side length and winning tile. Defaults match the classic game.
///
/// - `size`: number of cells on one side of the square board.
/// - `max_piece`: reaching a tile of this value ends the game.
///
/// Loadable from JSON; omitted fields take their defaults:
/// ```
/// use tilt_2048::GameConfig;
/// let cfg = GameConfig::from_json_str(r#"{ "size": 5 }"#).unwrap();
/// assert_eq!((cfg.size, cfg.max_piece), (5, 2048));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side.
    pub size: usize,
    /// Largest piece value; the game is over once it appears.
    pub max_piece: u32,
}

impl GameConfig {
    pub const DEFAULT_SIZE: usize = 4;
    pub const DEFAULT_MAX_PIECE: u32 = 2048;

    /// Default config with a different side length.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self, EngineError> {
        let config: GameConfig = serde_json::from_str(text)
            .map_err(|e| EngineError::InvalidConfig(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject boards too small to merge on and unreachable max pieces.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.size < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "size must be at least 2, got {}",
                self.size
            )));
        }
        if self.max_piece < 4
            || self.max_piece > Tile::MAX_VALUE
            || !self.max_piece.is_power_of_two()
        {
            return Err(EngineError::InvalidConfig(format!(
                "max_piece must be a power of two in 4..={}, got {}",
                Tile::MAX_VALUE,
                self.max_piece
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            max_piece: Self::DEFAULT_MAX_PIECE,
        }
    }
}
