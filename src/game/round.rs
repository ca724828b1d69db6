/// Record of one resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub index: usize,
    pub left: Hand,
    pub right: Hand,
    pub outcome: Outcome,
    /// the losing seat's standing line, taken before this round settled
    pub loser: Option<String>,
}

impl Round {
    pub fn is_even(&self) -> bool {
        self.outcome == Outcome::Even
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.loser {
            Some(ref standing) => write!(f, "Winner {}", standing),
            None => write!(f, "Even..."),
        }
    }
}

use super::Outcome;
use crate::hand::Hand;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines() {
        let won = Round {
            index: 0,
            left: Hand::Paper,
            right: Hand::Rock,
            outcome: Outcome::Left,
            loser: Some("[ Hana: 4 games, 1 win, 2 lose ]".to_string()),
        };
        let tied = Round {
            index: 1,
            left: Hand::Rock,
            right: Hand::Rock,
            outcome: Outcome::Even,
            loser: None,
        };
        assert!(won.to_string() == "Winner [ Hana: 4 games, 1 win, 2 lose ]");
        assert!(tied.to_string() == "Even...");
        assert!(tied.is_even() && !won.is_even());
    }
}
