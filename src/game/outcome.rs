use crate::hand::Hand;
use std::cmp::Ordering;

/// Which seat took the round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Left,
    Right,
    Even,
}

/// (left, right) resolution
impl From<(Hand, Hand)> for Outcome {
    fn from((left, right): (Hand, Hand)) -> Self {
        match left.fight(&right) {
            Ordering::Greater => Self::Left,
            Ordering::Less => Self::Right,
            Ordering::Equal => Self::Even,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_pair() {
        assert!(Outcome::from((Hand::Rock, Hand::Scissors)) == Outcome::Left);
        assert!(Outcome::from((Hand::Scissors, Hand::Rock)) == Outcome::Right);
        assert!(Outcome::from((Hand::Paper, Hand::Rock)) == Outcome::Left);
        assert!(Outcome::from((Hand::Scissors, Hand::Paper)) == Outcome::Left);
        for hand in Hand::ALL {
            assert!(Outcome::from((hand, hand)) == Outcome::Even);
        }
    }
}
