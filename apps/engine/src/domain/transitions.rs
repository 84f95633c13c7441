//! The turn state machine: guarded transitions over `GameState`.
//!
//! Every transition is total and infallible: a violated guard (wrong
//! status, wrong actor, occupied position, exhausted deck) is a silent
//! no-op. Dispatchers rely on this to re-submit intents idempotently
//! without error-handling ceremony, so none of these functions may be
//! "improved" into returning errors.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cards_types::Card;
use crate::domain::deck::{generate_deck, GameRng};
use crate::domain::rules::{BOARD_SIZE, MAX_PLAYERS, SET_SIZE, TURN_DURATION};
use crate::domain::sets::{find_sets, is_valid_set};
use crate::domain::state::{
    AnimatingResult, GameState, Player, PlayerId, PlayerPosition, Status, TurnOutcome,
};

/// A single player action or timer event consumed by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddPlayer { position: PlayerPosition },
    StartGame,
    RestartGame,
    ClaimTurn { player_id: PlayerId },
    SelectCard { player_id: PlayerId, card: Card },
    ResolveTurn,
    ExpireTurn,
    DealMore,
    ResetGame,
    LeaveGame,
}

/// Apply one intent to the state. The generator is only consulted by
/// start/restart; `now` only by claims.
pub fn apply(state: &mut GameState, rng: &mut GameRng, now: OffsetDateTime, intent: &Intent) {
    match intent {
        Intent::AddPlayer { position } => add_player(state, *position),
        Intent::StartGame => start_game(state, rng),
        Intent::RestartGame => restart_game(state, rng),
        Intent::ClaimTurn { player_id } => claim_turn(state, *player_id, now),
        Intent::SelectCard { player_id, card } => select_card(state, *player_id, *card),
        Intent::ResolveTurn => resolve_turn(state),
        Intent::ExpireTurn => expire_turn(state),
        Intent::DealMore => deal_more(state),
        Intent::ResetGame => reset_game(state),
        Intent::LeaveGame => leave_game(state),
    }

    #[cfg(any(test, debug_assertions))]
    crate::domain::state::debug_validate(state);
}

/// Seat a new player at the given position. No-op if the position is
/// occupied (roster is capped at one player per edge).
pub fn add_player(state: &mut GameState, position: PlayerPosition) {
    if state.position_taken(position) || state.players.len() >= MAX_PLAYERS {
        return;
    }
    let name = format!("Player {}", state.players.len() + 1);
    state.players.push(Player {
        id: Uuid::new_v4(),
        name,
        score: 0,
        position,
    });
}

/// Deal a fresh board and enter play. No-op with an empty roster.
///
/// The generator stream continues across starts: restarting reshuffles, it
/// does not replay the previous deal.
pub fn start_game(state: &mut GameState, rng: &mut GameRng) {
    if state.players.is_empty() {
        return;
    }
    let mut deck = generate_deck(rng);
    state.board = deck.drain(..BOARD_SIZE).collect();
    state.deck = deck;
    state.status = Status::Playing;
    state.selection.clear();
    state.active_player_id = None;
    state.turn_expires_at = None;
    state.animating = None;
    state.message = Some("Game Started! Select 3 cards.".to_string());
}

/// As `start_game`, but also zeroes every score.
pub fn restart_game(state: &mut GameState, rng: &mut GameRng) {
    if state.players.is_empty() {
        return;
    }
    for p in &mut state.players {
        p.score = 0;
    }
    start_game(state, rng);
}

/// Grant the player an exclusive, time-boxed claim. No-op unless the game
/// is live, nobody holds a claim, and the player is on the roster.
pub fn claim_turn(state: &mut GameState, player_id: PlayerId, now: OffsetDateTime) {
    if state.status != Status::Playing || state.active_player_id.is_some() {
        return;
    }
    let Some(name) = state.player(player_id).map(|p| p.name.clone()) else {
        return;
    };
    state.active_player_id = Some(player_id);
    state.selection.clear();
    state.turn_expires_at = Some(now + TURN_DURATION);
    state.message = Some(format!("{name} called SET!"));
}

/// Toggle a card in the claimant's selection. On the third card the
/// outcome is computed and frozen into `animating`; the board and scores
/// are not touched until `resolve_turn`.
pub fn select_card(state: &mut GameState, player_id: PlayerId, card: Card) {
    if state.status != Status::Playing
        || state.animating.is_some()
        || state.active_player_id != Some(player_id)
    {
        return;
    }

    if let Some(pos) = state.selection.iter().position(|&c| c == card) {
        state.selection.remove(pos);
        return;
    }
    if state.selection.len() >= SET_SIZE || !state.board.contains(&card) {
        return;
    }
    state.selection.push(card);

    if state.selection.len() == SET_SIZE {
        let cards = [state.selection[0], state.selection[1], state.selection[2]];
        let outcome = if is_valid_set(cards[0], cards[1], cards[2]) {
            TurnOutcome::Success
        } else {
            TurnOutcome::Failure
        };
        state.animating = Some(AnimatingResult {
            outcome,
            cards,
            player_id,
        });
        // Countdown stops here; the turn is committed to resolution.
        state.turn_expires_at = None;
    }
}

/// Apply the frozen outcome: score change, in-place board replacement, and
/// game-over detection. No-op without a pending animation.
pub fn resolve_turn(state: &mut GameState) {
    let Some(anim) = state.animating.take() else {
        return;
    };

    match anim.outcome {
        TurnOutcome::Success => {
            if let Some(p) = state.player_mut(anim.player_id) {
                p.score += 1;
            }

            // Decided once for the whole resolution: a board already above
            // target (after deal-more) shrinks back instead of refilling.
            let needs_replacement = state.board.len() <= BOARD_SIZE && !state.deck.is_empty();

            let mut removals: Vec<usize> = Vec::new();
            for card in anim.cards {
                let Some(idx) = state.board.iter().position(|&c| c == card) else {
                    continue;
                };
                if needs_replacement {
                    if let Some(drawn) = state.deck.pop() {
                        state.board[idx] = drawn;
                        continue;
                    }
                }
                removals.push(idx);
            }
            removals.sort_unstable_by(|a, b| b.cmp(a));
            for idx in removals {
                state.board.remove(idx);
            }

            state.message = Some("Set Found!".to_string());
            if state.deck.is_empty() && find_sets(&state.board).is_empty() {
                state.status = Status::GameOver;
                state.message = Some("Game Over!".to_string());
            }
        }
        TurnOutcome::Failure => {
            if let Some(p) = state.player_mut(anim.player_id) {
                p.score = p.score.saturating_sub(1);
            }
            state.message = Some("Invalid Set!".to_string());
        }
    }

    state.active_player_id = None;
    state.selection.clear();
    state.turn_expires_at = None;
}

/// Time out the current claim with the failed-set penalty. No-op without a
/// claimant, and no-op while an animation is pending: once three cards are
/// chosen the outcome belongs to `resolve_turn`, so a ticker firing in the
/// gap is absorbed here.
pub fn expire_turn(state: &mut GameState) {
    if state.animating.is_some() {
        return;
    }
    let Some(player_id) = state.active_player_id.take() else {
        return;
    };
    if let Some(p) = state.player_mut(player_id) {
        p.score = p.score.saturating_sub(1);
        let name = p.name.clone();
        state.message = Some(format!("{name} ran out of time!"));
    }
    state.selection.clear();
    state.turn_expires_at = None;
}

/// Deal three more cards face-up. Permissive policy: allowed even while a
/// set is still on the board. With the deck exhausted and no set in sight
/// this is where the game ends.
pub fn deal_more(state: &mut GameState) {
    if state.status != Status::Playing {
        return;
    }
    if state.deck.len() >= SET_SIZE {
        let dealt: Vec<Card> = state.deck.drain(..SET_SIZE).collect();
        state.board.extend(dealt);
    } else if state.deck.is_empty() && find_sets(&state.board).is_empty() {
        state.status = Status::GameOver;
        state.message = Some("Game Over!".to_string());
    }
}

/// Back to the lobby: cards gone, scores zeroed, roster retained.
pub fn reset_game(state: &mut GameState) {
    state.status = Status::Lobby;
    state.deck.clear();
    state.board.clear();
    state.selection.clear();
    state.active_player_id = None;
    state.turn_expires_at = None;
    state.animating = None;
    for p in &mut state.players {
        p.score = 0;
    }
}

/// As `reset_game`, plus an irreversible roster wipe.
pub fn leave_game(state: &mut GameState) {
    reset_game(state);
    state.players.clear();
}
