use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cards_types::Card;
use crate::domain::rules::DECK_SIZE;

pub type PlayerId = Uuid;

/// Overall game progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Players may join; no cards dealt.
    Lobby,
    /// Board is live and claims are accepted.
    Playing,
    /// Deck exhausted and no set remains on the board.
    GameOver,
}

/// Table edge a player sits at. Unique among active players.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerPosition {
    Bottom,
    Right,
    Top,
    Left,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 4] = [
        PlayerPosition::Bottom,
        PlayerPosition::Right,
        PlayerPosition::Top,
        PlayerPosition::Left,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Score floor of zero is enforced by the type.
    pub score: u32,
    pub position: PlayerPosition,
}

/// Outcome of a completed three-card selection.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    Success,
    Failure,
}

/// Frozen selection awaiting `resolve_turn`. While this is set the board
/// and scores are untouched and no selection intents are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatingResult {
    pub outcome: TurnOutcome,
    pub cards: [Card; 3],
    pub player_id: PlayerId,
}

/// Entire game container, sufficient for all pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current lifecycle status.
    pub status: Status,
    /// Face-down draw pile. Opening deal and deal-more drain the front;
    /// in-place replacement pops the tail.
    pub deck: Vec<Card>,
    /// Face-up cards in fixed slot order. Replacement happens in place at a
    /// slot index, never by append.
    pub board: Vec<Card>,
    /// Roster, in join order (at most one player per position).
    pub players: Vec<Player>,
    /// Current claimant, if any. While set, no other claim is granted.
    pub active_player_id: Option<PlayerId>,
    /// Cards the claimant has toggled on, in selection order (≤ 3, all on
    /// the board).
    pub selection: Vec<Card>,
    /// Last status string, for UI feedback.
    pub message: Option<String>,
    /// Absolute expiry of the current claim. The state machine runs no
    /// timer; an external ticker compares wall-clock time against this.
    pub turn_expires_at: Option<OffsetDateTime>,
    /// Pending resolution, if three cards have been chosen.
    pub animating: Option<AnimatingResult>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            status: Status::Lobby,
            deck: Vec::new(),
            board: Vec::new(),
            players: Vec::new(),
            active_player_id: None,
            selection: Vec::new(),
            message: None,
            turn_expires_at: None,
            animating: None,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn position_taken(&self, position: PlayerPosition) -> bool {
        self.players.iter().any(|p| p.position == position)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Consistency checks for debug and test builds.
///
/// A violation here is an unrecoverable programming fault in the transition
/// code, never a runtime-recoverable condition, so it surfaces only as an
/// assertion.
#[cfg(any(test, debug_assertions))]
pub(crate) fn debug_validate(state: &GameState) {
    use std::collections::HashSet;

    let mut seen: HashSet<Card> = HashSet::new();
    for card in state.deck.iter().chain(state.board.iter()) {
        debug_assert!(
            seen.insert(*card),
            "duplicate card across deck/board: {card}"
        );
    }
    debug_assert!(
        state.deck.len() + state.board.len() <= DECK_SIZE,
        "deck+board exceed the card universe"
    );

    debug_assert!(state.selection.len() <= 3, "selection exceeds three cards");
    for card in &state.selection {
        debug_assert!(
            state.board.contains(card),
            "selected card not on board: {card}"
        );
    }

    if state.animating.is_some() {
        debug_assert_eq!(
            state.selection.len(),
            3,
            "animating requires a frozen three-card selection"
        );
    }

    let mut positions: HashSet<PlayerPosition> = HashSet::new();
    for p in &state.players {
        debug_assert!(
            positions.insert(p.position),
            "two players share position {:?}",
            p.position
        );
    }
}
