use std::cmp::Ordering;

/// One of three throws, in cycle order.
/// Each hand beats the one after it and loses to the one before it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hand {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Hand {
    pub const COUNT: usize = 3;
    pub const ALL: [Self; Self::COUNT] = [Self::Rock, Self::Scissors, Self::Paper];

    /// position in the cycle
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// the hand this one beats
    const fn prey(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    pub fn is_stronger_than(&self, other: &Self) -> bool {
        self.fight(other) == Ordering::Greater
    }

    pub fn is_weaker_than(&self, other: &Self) -> bool {
        self.fight(other) == Ordering::Less
    }

    /// Greater if self wins, Less if self loses, Equal on a tie.
    pub fn fight(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.prey() == *other {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

/// u8 validation
impl TryFrom<u8> for Hand {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Rock),
            1 => Ok(Self::Scissors),
            2 => Ok(Self::Paper),
            _ => Err(anyhow::anyhow!("invalid hand value: {} (expected 0, 1 or 2)", n)),
        }
    }
}
impl From<Hand> for u8 {
    fn from(h: Hand) -> u8 {
        h as u8
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Hand::Rock => "Rock",
            Hand::Scissors => "Scissors",
            Hand::Paper => "Paper",
        })
    }
}
