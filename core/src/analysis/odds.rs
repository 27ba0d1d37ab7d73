use serde::{Deserialize, Serialize};

use super::Observation;
use crate::*;

/// Chances of the remaining round, assuming the prizes left are spread uniformly over the
/// hidden cells. No reveal order is better than another, so these hold for any strategy.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    pub hidden_cells: CellCount,
    pub prizes_left: CellCount,
    /// Tries left, capped at the number of hidden cells.
    pub tries_left: CellCount,
    /// Chance that the next reveal finds a prize.
    pub hit_chance: f64,
    /// Chance that the remaining tries uncover every remaining prize.
    pub win_chance: f64,
}

impl Odds {
    pub fn can_still_win(&self) -> bool {
        self.prizes_left <= self.tries_left
    }
}

pub fn analyze(obs: &Observation) -> Odds {
    let hidden_cells = obs.hidden_cells();
    let prizes_left = obs.prizes_left().min(hidden_cells);
    let tries_left = match obs.state {
        RoundState::InProgress => obs.tries_left().min(hidden_cells),
        RoundState::Won | RoundState::Lost => 0,
    };

    let hit_chance = if hidden_cells == 0 || tries_left == 0 {
        0.0
    } else {
        f64::from(prizes_left) / f64::from(hidden_cells)
    };

    Odds {
        hidden_cells,
        prizes_left,
        tries_left,
        hit_chance,
        win_chance: win_chance(hidden_cells, prizes_left, tries_left),
    }
}

/// `C(h - p, t - p) / C(h, t)`: the chance a uniformly drawn `t`-subset of `h` cells contains
/// all `p` prize cells, computed as the product `(t - i) / (h - i)` for `i < p`.
fn win_chance(hidden: CellCount, prizes: CellCount, tries: CellCount) -> f64 {
    if prizes > tries {
        return 0.0;
    }
    (0..prizes)
        .map(|i| f64::from(tries - i) / f64::from(hidden - i))
        .product()
}
