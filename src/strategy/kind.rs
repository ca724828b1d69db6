use super::*;
use crate::Seed;

/// Which strategy a player is seated with.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum StrategyKind {
    /// repeat a winning hand, otherwise throw at random
    Winning,
    /// sample from learned transition weights
    Prob,
}

impl StrategyKind {
    pub fn build(self, seed: Seed) -> Box<dyn Strategy> {
        match self {
            Self::Winning => Box::new(WinningStrategy::new(seed)),
            Self::Prob => Box::new(ProbStrategy::new(seed)),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winning => write!(f, "winning"),
            Self::Prob => write!(f, "prob"),
        }
    }
}
