use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Both final states only go back to a fresh InProgress through a reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One play-through: a prize layout plus everything the player has revealed so far.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    config: RoundConfig,
    prize_layout: PrizeLayout,
    board: Array2<EngineCell>,
    attempts: CellCount,
    found_prizes: CellCount,
    state: RoundState,
}

impl Round {
    pub fn start(config: RoundConfig, generator: impl PrizeGenerator) -> Result<Self> {
        let config = config.validate()?;
        Self::with_layout(config, generator.generate(config))
    }

    pub fn with_layout(config: RoundConfig, prize_layout: PrizeLayout) -> Result<Self> {
        let config = config.validate()?;
        if prize_layout.size() != config.size() || prize_layout.prize_count() != config.prizes {
            return Err(ConfigError::LayoutMismatch.into());
        }

        log::debug!(
            "Round started on a {}x{} grid, {} prizes in {} tries",
            config.rows,
            config.columns,
            config.prizes,
            config.max_tries
        );

        Ok(Self {
            config,
            board: Array2::default(config.size().to_nd_index()),
            prize_layout,
            attempts: 0,
            found_prizes: 0,
            state: Default::default(),
        })
    }

    /// Throws away everything about this round and starts over with the same configuration.
    pub fn reset(&mut self, generator: impl PrizeGenerator) -> Result<()> {
        *self = Self::start(self.config, generator)?;
        Ok(())
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn attempts(&self) -> CellCount {
        self.attempts
    }

    pub fn found_prizes(&self) -> CellCount {
        self.found_prizes
    }

    pub fn prizes_left(&self) -> CellCount {
        self.config.prizes - self.found_prizes
    }

    pub fn tries_left(&self) -> CellCount {
        self.config.max_tries.saturating_sub(self.attempts)
    }

    pub fn board(&self) -> &Array2<EngineCell> {
        &self.board
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<EngineCell> {
        let coords = self.prize_layout.validate_index(index)?;
        Ok(self.board[coords.to_nd_index()])
    }

    pub fn is_revealed(&self, index: CellIndex) -> bool {
        self.cell_at(index).is_ok_and(EngineCell::is_revealed)
    }

    /// Whether a prize is hidden at `index`, regardless of what the player has seen.
    pub fn has_prize_at(&self, index: CellIndex) -> bool {
        self.prize_layout.contains_prize(index)
    }

    pub fn prize_cells(&self) -> Vec<CellIndex> {
        self.prize_layout.prize_cells()
    }

    /// Revealed cells in ascending index order.
    pub fn revealed_cells(&self) -> Vec<CellIndex> {
        self.board
            .iter()
            .zip(0..)
            .filter_map(|(cell, index)| cell.is_revealed().then_some(index))
            .collect()
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealResult> {
        let coords = self.prize_layout.validate_index(index)?;

        if self.state.is_finished() || self.board[coords.to_nd_index()].is_revealed() {
            log::trace!("Ignoring reveal of cell {index} in state {:?}", self.state);
            return Ok(self.result(true, false));
        }

        let is_prize = self.prize_layout[coords];
        self.board[coords.to_nd_index()] = if is_prize {
            EngineCell::Prize
        } else {
            EngineCell::Empty
        };
        self.attempts += 1;
        if is_prize {
            self.found_prizes += 1;
        }

        // a complete set on the last try still counts as a win
        self.state = if self.found_prizes == self.config.prizes {
            RoundState::Won
        } else if self.attempts >= self.config.max_tries {
            RoundState::Lost
        } else {
            RoundState::InProgress
        };

        log::debug!(
            "Revealed cell {index}: prize={is_prize}, attempts={}, found={}, state={:?}",
            self.attempts,
            self.found_prizes,
            self.state
        );

        Ok(self.result(false, is_prize))
    }

    fn result(&self, ignored: bool, is_prize: bool) -> RevealResult {
        RevealResult {
            ignored,
            is_prize,
            attempts: self.attempts,
            found_prizes: self.found_prizes,
            state: self.state,
        }
    }
}
