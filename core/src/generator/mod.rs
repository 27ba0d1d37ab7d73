use crate::*;
pub use random::*;

mod random;

pub trait PrizeGenerator {
    fn generate(self, config: RoundConfig) -> PrizeLayout;
}

/// Hands out a layout that was decided up front, useful for replays and scripted rounds.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedPrizeGenerator(pub PrizeLayout);

impl PrizeGenerator for FixedPrizeGenerator {
    fn generate(self, _config: RoundConfig) -> PrizeLayout {
        self.0
    }
}
