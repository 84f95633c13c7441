#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::deck::{generate_deck, GameRng, GameSeed};
pub use domain::sets::{find_sets, is_valid_set};
pub use domain::snapshot::{snapshot, GameSnapshot};
pub use domain::state::{GameState, Player, PlayerId, PlayerPosition, Status};
pub use domain::transitions::Intent;
pub use domain::{Card, Color, Count, Shading, Shape};
pub use errors::DomainError;
pub use services::table::GameTable;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
