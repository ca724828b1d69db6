//! Sequential head-to-head play between two seated players.
//!
//! Each round both players throw, the hands are compared, and feedback is
//! applied before the next round begins.

mod matchup;
mod outcome;
mod round;
mod summary;

pub use matchup::*;
pub use outcome::*;
pub use round::*;
pub use summary::*;
