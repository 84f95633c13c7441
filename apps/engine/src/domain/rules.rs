use time::Duration;

/// Size of the full card universe (3 × 3 × 3 × 3 attribute combinations).
pub const DECK_SIZE: usize = 81;

/// Cards dealt face-up at game start, and the target the board is refilled to.
pub const BOARD_SIZE: usize = 12;

/// Cards in a set, and the number added by a deal-more.
pub const SET_SIZE: usize = 3;

/// One player per table edge.
pub const MAX_PLAYERS: usize = 4;

/// How long a claimant has to pick three cards.
pub const TURN_DURATION: Duration = Duration::seconds(10);
