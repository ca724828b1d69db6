mod player;
mod tally;

pub use player::*;
pub use tally::*;
