//! Startup configuration for a game table.
//!
//! The engine itself never reads a URL; whatever front door exists (a URL
//! `?seed=` reader, a CLI flag) hands the seed over as text. `from_env` is
//! provided for hosts that wire the seed through the environment.

use std::env;

use crate::domain::deck::GameSeed;

/// Configuration accepted once at table construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Optional deck seed. `None` seeds the generator from OS entropy.
    pub seed: Option<GameSeed>,
}

impl GameConfig {
    pub fn seeded(seed: impl Into<GameSeed>) -> Self {
        Self {
            seed: Some(seed.into()),
        }
    }

    /// Build a config from the `GAME_SEED` environment variable.
    ///
    /// The value is always treated as a text seed, exactly as a URL
    /// `?seed=` reader would hand it over, so `GAME_SEED=42` and a numeric
    /// seed of 42 are deliberately different games.
    pub fn from_env() -> Self {
        let seed = env::var("GAME_SEED").ok().map(GameSeed::Text);
        Self { seed }
    }
}
