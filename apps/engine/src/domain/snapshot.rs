//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::cards_types::Card;
use crate::domain::rules::SET_SIZE;
use crate::domain::state::{GameState, PlayerId, PlayerPosition, Status, TurnOutcome};

/// Render-ready view of a face-up card: the stable id token plus the four
/// attributes broken out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardPublic {
    pub id: String,
    pub count: u8,
    pub shape: String,
    pub color: String,
    pub shading: String,
}

impl From<Card> for CardPublic {
    fn from(card: Card) -> Self {
        Self {
            id: card.id(),
            count: card.count.as_u8(),
            shape: card.shape.as_str().to_string(),
            color: card.color.as_str().to_string(),
            shading: card.shading.as_str().to_string(),
        }
    }
}

/// Public info about a single player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub position: PlayerPosition,
}

/// Pending resolution as shown to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimatingPublic {
    pub outcome: TurnOutcome,
    pub card_ids: [String; 3],
    pub player_id: PlayerId,
}

/// Full state snapshot returned after every transition, read-only.
///
/// The deck stays face-down: only its size is exposed. Derived
/// enable/disable signals ride along so the UI never re-derives guards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: Status,
    pub board: Vec<CardPublic>,
    pub deck_count: usize,
    pub players: Vec<PlayerPublic>,
    pub active_player_id: Option<PlayerId>,
    /// Selected card ids in selection order.
    pub selection: Vec<String>,
    pub message: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub turn_expires_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animating: Option<AnimatingPublic>,
    pub claim_enabled: bool,
    pub deal_more_enabled: bool,
}

/// Claim is available iff the game is live and nobody holds the turn.
pub fn claim_enabled(state: &GameState) -> bool {
    state.status == Status::Playing && state.active_player_id.is_none()
}

/// Selection is available to the claimant only, and never while a
/// resolution is pending.
pub fn select_enabled(state: &GameState, player_id: PlayerId) -> bool {
    state.status == Status::Playing
        && state.animating.is_none()
        && state.active_player_id == Some(player_id)
}

/// Deal-more is available while the deck can still supply three cards.
pub fn deal_more_enabled(state: &GameState) -> bool {
    state.deck.len() >= SET_SIZE
}

/// Entry point: produce a snapshot of the current game state.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        status: state.status,
        board: state.board.iter().copied().map(CardPublic::from).collect(),
        deck_count: state.deck.len(),
        players: state
            .players
            .iter()
            .map(|p| PlayerPublic {
                id: p.id,
                name: p.name.clone(),
                score: p.score,
                position: p.position,
            })
            .collect(),
        active_player_id: state.active_player_id,
        selection: state.selection.iter().map(Card::id).collect(),
        message: state.message.clone(),
        turn_expires_at: state.turn_expires_at,
        animating: state.animating.as_ref().map(|a| AnimatingPublic {
            outcome: a.outcome,
            card_ids: [a.cards[0].id(), a.cards[1].id(), a.cards[2].id()],
            player_id: a.player_id,
        }),
        claim_enabled: claim_enabled(state),
        deal_more_enabled: deal_more_enabled(state),
    }
}
