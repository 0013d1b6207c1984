use thiserror::Error;

/// Precondition violations reported by the board and model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("cell ({col}, {row}) is already occupied")]
    Occupied { col: usize, row: usize },
    #[error("cell ({col}, {row}) is outside a {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },
    #[error("tile value {0} is not a power of two >= 2")]
    InvalidValue(u32),
    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        expected: usize,
        row: usize,
        found: usize,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
