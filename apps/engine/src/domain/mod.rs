//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod rules;
pub mod sets;
pub mod snapshot;
pub mod state;
pub mod transitions;

#[cfg(test)]
mod tests_props_deck;
#[cfg(test)]
mod tests_resolution;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Color, Count, Shading, Shape};
pub use deck::{generate_deck, GameRng, GameSeed};
pub use sets::{find_sets, is_valid_set};
pub use state::{GameState, Player, PlayerId, PlayerPosition, Status};
