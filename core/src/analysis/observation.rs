use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player can see of a round. Hidden prize positions are never part of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub size: Coord2,
    pub prizes: CellCount,
    pub max_tries: CellCount,
    pub attempts: CellCount,
    pub found_prizes: CellCount,
    pub state: RoundState,
    pub cells: Array2<EngineCell>,
}

impl Observation {
    pub fn from_round(round: &Round) -> Self {
        let config = round.config();
        Self {
            size: config.size(),
            prizes: config.prizes,
            max_tries: config.max_tries,
            attempts: round.attempts(),
            found_prizes: round.found_prizes(),
            state: round.state(),
            cells: round.board().clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (self.size.0 as usize, self.size.1 as usize);
        if self.cells.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }

        let cells = mult(self.size.0, self.size.1);
        if self.prizes > cells {
            return Err(ConfigError::TooManyPrizes {
                prizes: self.prizes,
                cells,
            }
            .into());
        }

        Ok(())
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<EngineCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn hidden_cells(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_hidden())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn prizes_left(&self) -> CellCount {
        self.prizes.saturating_sub(self.found_prizes)
    }

    pub fn tries_left(&self) -> CellCount {
        self.max_tries.saturating_sub(self.attempts)
    }
}
