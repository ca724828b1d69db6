use serde::Serialize;
use serde::ser::SerializeStruct;

/// Running record of round results. Each round bumps exactly one counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    wins: usize,
    losses: usize,
    ties: usize,
}

impl Tally {
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.ties
    }

    pub fn win(&mut self) {
        self.wins += 1;
    }
    pub fn lose(&mut self) {
        self.losses += 1;
    }
    pub fn even(&mut self) {
        self.ties += 1;
    }
}

impl Serialize for Tally {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Tally", 4)?;
        state.serialize_field("games", &self.games())?;
        state.serialize_field("wins", &self.wins)?;
        state.serialize_field("losses", &self.losses)?;
        state.serialize_field("ties", &self.ties)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_counter_per_round() {
        let mut tally = Tally::default();
        tally.win();
        tally.lose();
        tally.lose();
        tally.even();
        assert!(tally.wins() == 1);
        assert!(tally.losses() == 2);
        assert!(tally.ties() == 1);
        assert!(tally.games() == 4);
    }

    #[test]
    fn serializes_games() {
        let mut tally = Tally::default();
        tally.win();
        tally.even();
        let json = serde_json::to_value(tally).unwrap();
        assert!(json == serde_json::json!({ "games": 2, "wins": 1, "losses": 0, "ties": 1 }));
    }
}
