/// Samples the next hand from transition weights conditioned on the hand
/// thrown last round. Rows start at one per cell and only grow, so every
/// row always has a positive total.
#[derive(Debug)]
pub struct ProbStrategy {
    rng: SmallRng,
    prev: Hand,
    curr: Hand,
    history: [[u32; Hand::COUNT]; Hand::COUNT],
}

impl ProbStrategy {
    pub fn new(seed: Seed) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            prev: Hand::Rock,
            curr: Hand::Rock,
            history: [[1; Hand::COUNT]; Hand::COUNT],
        }
    }

    pub fn history(&self) -> &[[u32; Hand::COUNT]; Hand::COUNT] {
        &self.history
    }

    /// total weight of transitions leaving `from`
    pub fn sum(&self, from: Hand) -> u32 {
        self.history[from.index()].iter().sum()
    }

    /// the (previous, current) transition that `study` will credit
    pub fn transition(&self) -> (Hand, Hand) {
        (self.prev, self.curr)
    }

    /// cumulative weight scan over the current row
    fn choose(&mut self) -> Hand {
        let total = self.sum(self.curr);
        let roll = self.rng.random_range(0..total);
        let row = &self.history[self.curr.index()];
        let mut sum = 0;
        for hand in Hand::ALL {
            sum += row[hand.index()];
            if roll < sum {
                return hand;
            }
        }
        unreachable!("roll bounded by row total")
    }
}

impl Strategy for ProbStrategy {
    fn next_hand(&mut self) -> Hand {
        let hand = self.choose();
        self.prev = self.curr;
        self.curr = hand;
        hand
    }

    fn study(&mut self, win: bool) {
        let row = &mut self.history[self.prev.index()];
        if win {
            row[self.curr.index()] += 1;
        } else {
            row[(self.curr.index() + 1) % Hand::COUNT] += 1;
            row[(self.curr.index() + 2) % Hand::COUNT] += 1;
        }
    }
}

use super::Strategy;
use crate::hand::Hand;
use crate::Seed;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
