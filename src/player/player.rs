use super::Tally;
use crate::hand::Hand;
use crate::strategy::Strategy;

/// A named seat that owns its strategy and keeps score.
#[derive(Debug)]
pub struct Player {
    name: String,
    strategy: Box<dyn Strategy>,
    tally: Tally,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
            tally: Tally::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn next_hand(&mut self) -> Hand {
        self.strategy.next_hand()
    }

    pub fn win(&mut self) {
        self.strategy.study(true);
        self.tally.win();
    }

    pub fn lose(&mut self) {
        self.strategy.study(false);
        self.tally.lose();
    }

    /// ties carry no signal, so the strategy is left alone
    pub fn even(&mut self) {
        self.tally.even();
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[ {}: {} games, {} win, {} lose ]",
            self.name,
            self.tally.games(),
            self.tally.wins(),
            self.tally.losses()
        )
    }
}
