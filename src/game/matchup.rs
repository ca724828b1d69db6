use super::*;
use crate::player::Player;

/// Two seated players and the number of rounds played between them so far.
///
/// Rounds are strictly sequential: a round's feedback reaches both strategies
/// before either is asked for its next hand, since a strategy's next choice may
/// depend on how the previous round went.
#[derive(Debug)]
pub struct Match {
    left: Player,
    right: Player,
    played: usize,
}

impl Match {
    pub fn new(left: Player, right: Player) -> Self {
        Self {
            left,
            right,
            played: 0,
        }
    }

    pub fn left(&self) -> &Player {
        &self.left
    }
    pub fn right(&self) -> &Player {
        &self.right
    }
    pub fn played(&self) -> usize {
        self.played
    }
    pub fn into_players(self) -> (Player, Player) {
        (self.left, self.right)
    }

    /// Throw, resolve, and hand out feedback for a single round.
    pub fn play(&mut self) -> Round {
        let left = self.left.next_hand();
        let right = self.right.next_hand();
        let outcome = Outcome::from((left, right));
        let loser = match outcome {
            Outcome::Left => Some(self.right.to_string()),
            Outcome::Right => Some(self.left.to_string()),
            Outcome::Even => None,
        };
        match outcome {
            Outcome::Left => {
                self.left.win();
                self.right.lose();
            }
            Outcome::Right => {
                self.right.win();
                self.left.lose();
            }
            Outcome::Even => {
                self.left.even();
                self.right.even();
            }
        }
        let index = self.played;
        self.played += 1;
        log::debug!("{:<8}{:<10}{:<10}{:?}", index, left, right, outcome);
        Round {
            index,
            left,
            right,
            outcome,
            loser,
        }
    }

    /// Lazily play `rounds` further rounds in order.
    pub fn run(&mut self, rounds: usize) -> impl Iterator<Item = Round> + '_ {
        (0..rounds).map(move |_| self.play())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            left: Standing::from(&self.left),
            right: Standing::from(&self.right),
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total result")?;
        writeln!(f, "{}", self.left)?;
        write!(f, "{}", self.right)
    }
}
