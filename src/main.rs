//! Roshambo Binary
//!
//! Plays a seeded match and prints one line per round, then the totals.

use clap::Parser;
use roshambo::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambo::log(args.level())?;
    args.run()
}
