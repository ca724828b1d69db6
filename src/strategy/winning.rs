/// Repeats the previous hand after a win, otherwise throws uniformly at random.
#[derive(Debug)]
pub struct WinningStrategy {
    rng: SmallRng,
    won: bool,
    prev: Option<Hand>,
}

impl WinningStrategy {
    pub fn new(seed: Seed) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            won: false,
            prev: None,
        }
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn prev(&self) -> Option<Hand> {
        self.prev
    }
}

impl Strategy for WinningStrategy {
    fn next_hand(&mut self) -> Hand {
        match (self.won, self.prev) {
            (true, Some(hand)) => hand,
            _ => {
                let hand = Hand::ALL[self.rng.random_range(0..Hand::COUNT)];
                self.prev = Some(hand);
                hand
            }
        }
    }

    fn study(&mut self, win: bool) {
        self.won = win;
    }
}

use super::Strategy;
use crate::hand::Hand;
use crate::Seed;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_hand_is_drawn() {
        let mut strategy = WinningStrategy::new(7);
        assert!(strategy.prev().is_none());
        let hand = strategy.next_hand();
        assert!(strategy.prev() == Some(hand));
    }

    #[test]
    fn first_hand_ignores_early_win() {
        let mut strategy = WinningStrategy::new(7);
        strategy.study(true);
        let hand = strategy.next_hand();
        assert!(strategy.prev() == Some(hand));
    }

    #[test]
    fn repeats_after_win() {
        let mut strategy = WinningStrategy::new(42);
        let ref mut feedback = SmallRng::seed_from_u64(1);
        for _ in 0..1000 {
            let last = strategy.next_hand();
            strategy.study(true);
            assert!(strategy.next_hand() == last);
            strategy.study(feedback.random_bool(0.5));
        }
    }

    #[test]
    fn redraws_after_loss() {
        let mut strategy = WinningStrategy::new(42);
        let mut seen = [false; Hand::COUNT];
        for _ in 0..1000 {
            seen[strategy.next_hand().index()] = true;
            strategy.study(false);
        }
        assert!(seen.iter().all(|s| *s), "every hand is reachable");
    }

    #[test]
    fn repeats_leave_rng_untouched() {
        let mut streak = WinningStrategy::new(77);
        let mut plain = WinningStrategy::new(77);
        for length in [0, 1, 5, 40] {
            assert!(streak.next_hand() == plain.next_hand());
            streak.study(true);
            for _ in 0..length {
                streak.next_hand();
                streak.study(true);
            }
            streak.study(false);
            plain.study(false);
        }
        for _ in 0..200 {
            assert!(streak.next_hand() == plain.next_hand());
            streak.study(false);
            plain.study(false);
        }
    }

    #[test]
    fn seeded_sequence() {
        let mut a = WinningStrategy::new(123);
        let mut b = WinningStrategy::new(123);
        for i in 0..500 {
            assert!(a.next_hand() == b.next_hand());
            a.study(i % 3 == 0);
            b.study(i % 3 == 0);
        }
    }

    #[test]
    fn win_flag_is_overwritten() {
        let mut strategy = WinningStrategy::new(0);
        strategy.next_hand();
        strategy.study(true);
        assert!(strategy.won());
        strategy.study(false);
        assert!(!strategy.won());
    }
}
