use alloc::vec;
use alloc::vec::Vec;

use super::*;

/// Purely random placement: every set of `prizes` cells is equally likely for a given grid.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPrizeGenerator {
    seed: u64,
}

impl RandomPrizeGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PrizeGenerator for RandomPrizeGenerator {
    fn generate(self, config: RoundConfig) -> PrizeLayout {
        use rand::prelude::*;

        let total_cells = usize::from(config.total_cells());
        let prizes = usize::from(config.prizes);

        // optimize for full grids
        if prizes >= total_cells {
            if prizes > total_cells {
                log::warn!(
                    "Grid already full, generated anyway, requested {} prizes but only {} cells fit",
                    prizes,
                    total_cells
                );
            }
            return PrizeLayout::from_prize_mask(Array2::from_elem(
                config.size().to_nd_index(),
                true,
            ));
        }

        // partial Fisher-Yates: only the first `prizes` slots get shuffled
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut cells: Vec<usize> = (0..total_cells).collect();
        for slot in 0..prizes {
            let pick = rng.random_range(slot..total_cells);
            cells.swap(slot, pick);
        }

        let mut chosen = vec![false; total_cells];
        for &cell in &cells[..prizes] {
            chosen[cell] = true;
        }

        let mut prize_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        for (is_prize, &chosen) in prize_mask.iter_mut().zip(&chosen) {
            *is_prize = chosen;
        }

        let layout = PrizeLayout::from_prize_mask(prize_mask);
        log::trace!("seed {} placed prizes at {:?}", self.seed, layout.prize_cells());
        layout
    }
}
