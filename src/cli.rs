use crate::*;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

/// Play seeded rock-paper-scissors between two adaptive strategies.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// number of rounds to play
    #[arg(short, long, default_value_t = ROUNDS)]
    pub rounds: usize,

    #[arg(long, default_value = LEFT_NAME)]
    pub left_name: String,
    #[arg(long, value_enum, default_value_t = StrategyKind::Winning)]
    pub left_strategy: StrategyKind,
    #[arg(long, default_value_t = LEFT_SEED)]
    pub left_seed: Seed,

    #[arg(long, default_value = RIGHT_NAME)]
    pub right_name: String,
    #[arg(long, value_enum, default_value_t = StrategyKind::Prob)]
    pub right_strategy: StrategyKind,
    #[arg(long, default_value_t = RIGHT_SEED)]
    pub right_seed: Seed,

    /// only print the final result
    #[arg(short, long)]
    pub quiet: bool,

    /// print the final result as JSON
    #[arg(long)]
    pub json: bool,

    /// disable colored output
    #[arg(long)]
    pub plain: bool,

    /// log every round to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    pub fn seat(&self) -> Match {
        Match::new(
            Player::new(&self.left_name, self.left_strategy.build(self.left_seed)),
            Player::new(&self.right_name, self.right_strategy.build(self.right_seed)),
        )
    }

    pub fn run(self) -> anyhow::Result<()> {
        if self.plain {
            colored::control::set_override(false);
        }
        let mut game = self.seat();
        log::info!(
            "{} ({} #{}) vs {} ({} #{}) over {} rounds",
            self.left_name,
            self.left_strategy,
            self.left_seed,
            self.right_name,
            self.right_strategy,
            self.right_seed,
            self.rounds,
        );
        let ref mut out = std::io::BufWriter::new(std::io::stdout().lock());
        for round in game.run(self.rounds) {
            if self.quiet {
                continue;
            }
            match round.loser {
                Some(_) => writeln!(out, "{}", round.to_string().green())?,
                None => writeln!(out, "{}", round.to_string().dimmed())?,
            }
        }
        if self.json {
            writeln!(out, "{}", game.summary().to_json()?)?;
        } else {
            writeln!(out, "{}", game)?;
        }
        out.flush()?;
        log::info!("finished {} rounds", game.played());
        Ok(())
    }
}
