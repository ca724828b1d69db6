pub mod game;
pub mod hand;
pub mod player;
pub mod strategy;

#[cfg(feature = "cli")]
pub mod cli;

pub use game::*;
pub use hand::Hand;
pub use player::*;
pub use strategy::*;

/// Seeds feed `SeedableRng::seed_from_u64` directly.
pub type Seed = u64;

// ============================================================================
// MATCH PARAMETERS
// Defaults reproduce the reference demonstration: a win-repeater against a
// transition learner over ten thousand rounds.
// ============================================================================
/// Rounds played when no count is given.
pub const ROUNDS: usize = 10_000;
/// Name of the player seated on the left.
pub const LEFT_NAME: &str = "Taro";
/// Seed for the left player's strategy.
pub const LEFT_SEED: Seed = 123;
/// Name of the player seated on the right.
pub const RIGHT_NAME: &str = "Hana";
/// Seed for the right player's strategy.
pub const RIGHT_SEED: Seed = 0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, leaving stdout to the match report.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
