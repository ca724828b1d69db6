//! Adaptive policies that pick the next hand and learn from round results.
//!
//! A strategy is driven in strict alternation by its owning player:
//! one call to `next_hand`, then at most one call to `study` once the round
//! resolves. Ties produce no feedback, so `study` is skipped for them.
//!
//! Every strategy owns an explicitly seeded generator. Two strategies built
//! from the same kind and seed produce identical hand sequences given the same
//! feedback.

mod kind;
mod prob;
mod winning;

pub use kind::*;
pub use prob::*;
pub use winning::*;

use crate::hand::Hand;
use std::fmt::Debug;

pub trait Strategy: Debug {
    /// Choose the hand to throw this round.
    fn next_hand(&mut self) -> Hand;

    /// Learn whether the hand just thrown won or lost.
    fn study(&mut self, win: bool);
}
