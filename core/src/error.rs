use thiserror::Error;

use crate::types::{CellCount, CellIndex};

/// Reasons a [`RoundConfig`](crate::RoundConfig) or fixed layout cannot start a round.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid needs at least one row and one column")]
    EmptyGrid,
    #[error("round needs at least one prize")]
    NoPrizes,
    #[error("round needs at least one try")]
    NoTries,
    #[error("{prizes} prizes do not fit in {cells} cells")]
    TooManyPrizes { prizes: CellCount, cells: CellCount },
    #[error("prize layout does not match the configured grid")]
    LayoutMismatch,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Invalid cell index {0}")]
    InvalidCell(CellIndex),
    #[error("Cell {0} holds more than one prize")]
    DuplicatePrize(CellIndex),
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
