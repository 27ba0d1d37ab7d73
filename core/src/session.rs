use rand::prelude::*;

use crate::*;

/// Drives round after round of the same configuration.
///
/// Every round draws its placement seed from a stream seeded once by the session, so a whole
/// session replays from its master seed while each reset still gets a fresh prize layout.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: RoundConfig,
    seeds: SmallRng,
    round_seed: u64,
    rounds_started: u32,
    round: Round,
}

impl GameSession {
    pub fn new(config: RoundConfig, seed: u64) -> Result<Self> {
        let config = config.validate()?;
        let mut seeds = SmallRng::seed_from_u64(seed);
        let round_seed = seeds.next_u64();
        let round = Round::start(config, RandomPrizeGenerator::new(round_seed))?;
        Ok(Self {
            config,
            seeds,
            round_seed,
            rounds_started: 1,
            round,
        })
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Seed the current round's layout was generated from.
    pub fn round_seed(&self) -> u64 {
        self.round_seed
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealResult> {
        let result = self.round.reveal(index)?;
        match result.state {
            RoundState::Won if result.has_update() => log::info!(
                "Round {} won after {} tries",
                self.rounds_started,
                result.attempts
            ),
            RoundState::Lost if result.has_update() => log::info!(
                "Round {} lost with {} of {} prizes found",
                self.rounds_started,
                result.found_prizes,
                self.config.prizes
            ),
            _ => {}
        }
        Ok(result)
    }

    pub fn reset(&mut self) -> Result<&Round> {
        self.round_seed = self.seeds.next_u64();
        self.round.reset(RandomPrizeGenerator::new(self.round_seed))?;
        self.rounds_started += 1;
        log::debug!("Round {} started", self.rounds_started);
        Ok(&self.round)
    }
}
