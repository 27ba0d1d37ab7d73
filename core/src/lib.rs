#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod generator;
mod session;
mod tile;
mod types;

/// Shape and budget of a round: `rows × columns` cells hiding `prizes` prizes, found within
/// `max_tries` reveals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub prizes: CellCount,
    pub max_tries: CellCount,
}

impl RoundConfig {
    pub const DEFAULT: Self = Self::new(3, 5, 3, 6);

    pub const fn new(rows: Coord, columns: Coord, prizes: CellCount, max_tries: CellCount) -> Self {
        Self {
            rows,
            columns,
            prizes,
            max_tries,
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub fn validate(self) -> Result<Self> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid.into());
        }
        if self.prizes == 0 {
            return Err(ConfigError::NoPrizes.into());
        }
        if self.max_tries == 0 {
            return Err(ConfigError::NoTries.into());
        }
        let cells = self.total_cells();
        if self.prizes > cells {
            return Err(ConfigError::TooManyPrizes {
                prizes: self.prizes,
                cells,
            }
            .into());
        }
        if self.max_tries > cells {
            log::warn!(
                "Try budget {} exceeds the {} cells of the grid, rounds can only end by revealing every prize",
                self.max_tries,
                cells
            );
        }
        Ok(self)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Where the prizes of one round are hidden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrizeLayout {
    prize_mask: Array2<bool>,
    prize_count: CellCount,
}

impl PrizeLayout {
    pub fn from_prize_mask(prize_mask: Array2<bool>) -> Self {
        let prize_count = prize_mask
            .iter()
            .filter(|&&is_prize| is_prize)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            prize_mask,
            prize_count,
        }
    }

    pub fn from_prize_cells(size: Coord2, prize_cells: &[CellIndex]) -> Result<Self> {
        let mut prize_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &index in prize_cells {
            let coords = index_to_coords(index, size).ok_or(GameError::InvalidCell(index))?;
            if prize_mask[coords.to_nd_index()] {
                return Err(GameError::DuplicatePrize(index));
            }
            prize_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_prize_mask(prize_mask))
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<Coord2> {
        index_to_coords(index, self.size()).ok_or(GameError::InvalidCell(index))
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.prize_mask.dim();
        (
            rows.try_into().unwrap_or(Coord::MAX),
            columns.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        self.prize_mask.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn prize_count(&self) -> CellCount {
        self.prize_count
    }

    pub fn empty_cell_count(&self) -> CellCount {
        self.total_cells() - self.prize_count
    }

    pub fn contains_prize(&self, index: CellIndex) -> bool {
        index_to_coords(index, self.size()).is_some_and(|coords| self[coords])
    }

    /// Prize cells in ascending index order.
    pub fn prize_cells(&self) -> Vec<CellIndex> {
        self.prize_mask
            .iter()
            .zip(0..)
            .filter_map(|(&is_prize, index)| is_prize.then_some(index))
            .collect()
    }
}

impl Index<Coord2> for PrizeLayout {
    type Output = bool;

    fn index(&self, (row, column): Coord2) -> &Self::Output {
        &self.prize_mask[(row as usize, column as usize)]
    }
}

impl IndexMut<Coord2> for PrizeLayout {
    fn index_mut(&mut self, (row, column): Coord2) -> &mut Self::Output {
        &mut self.prize_mask[(row as usize, column as usize)]
    }
}

/// What a single reveal did, along with the round counters right after it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    /// The reveal was a no-op: the cell was already revealed or the round had ended.
    pub ignored: bool,
    pub is_prize: bool,
    pub attempts: CellCount,
    pub found_prizes: CellCount,
    pub state: RoundState,
}

impl RevealResult {
    pub const fn has_update(self) -> bool {
        !self.ignored
    }

    pub const fn is_final(self) -> bool {
        self.state.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_three_by_five() {
        let config = RoundConfig::default();

        assert_eq!(config, RoundConfig::new(3, 5, 3, 6));
        assert_eq!(config.total_cells(), 15);
        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn validate_rejects_too_many_prizes() {
        let config = RoundConfig::new(3, 5, 20, 6);

        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyPrizes {
                prizes: 20,
                cells: 15
            }))
        );
    }

    #[test]
    fn validate_rejects_zero_counts() {
        assert_eq!(
            RoundConfig::new(0, 5, 3, 6).validate(),
            Err(ConfigError::EmptyGrid.into())
        );
        assert_eq!(
            RoundConfig::new(3, 0, 3, 6).validate(),
            Err(ConfigError::EmptyGrid.into())
        );
        assert_eq!(
            RoundConfig::new(3, 5, 0, 6).validate(),
            Err(ConfigError::NoPrizes.into())
        );
        assert_eq!(
            RoundConfig::new(3, 5, 3, 0).validate(),
            Err(ConfigError::NoTries.into())
        );
    }

    #[test]
    fn generous_try_budget_is_allowed() {
        let config = RoundConfig::new(2, 2, 1, 10);

        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn layout_from_prize_cells_maps_row_major() {
        let layout = PrizeLayout::from_prize_cells((3, 5), &[9, 2, 5]).unwrap();

        assert_eq!(layout.prize_count(), 3);
        assert_eq!(layout.empty_cell_count(), 12);
        assert_eq!(layout.prize_cells(), [2, 5, 9]);
        assert!(layout[(1, 4)]);
        assert!(layout.contains_prize(5));
        assert!(!layout.contains_prize(6));
        assert!(!layout.contains_prize(99));
    }

    #[test]
    fn layout_rejects_bad_prize_cells() {
        assert_eq!(
            PrizeLayout::from_prize_cells((3, 5), &[1, 15]),
            Err(GameError::InvalidCell(15))
        );
        assert_eq!(
            PrizeLayout::from_prize_cells((3, 5), &[4, 4]),
            Err(GameError::DuplicatePrize(4))
        );
    }

    #[test]
    fn config_deserializes_with_defaults_for_missing_fields() {
        let config: RoundConfig = serde_json::from_str(r#"{"rows": 4, "max_tries": 8}"#).unwrap();

        assert_eq!(config, RoundConfig::new(4, 5, 3, 8));
    }
}
