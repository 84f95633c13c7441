//! Unit tests for turn resolution: scoring, in-place replacement, board
//! shrinkage, and end-of-game detection.

use crate::domain::rules::BOARD_SIZE;
use crate::domain::state::{Status, TurnOutcome};
use crate::domain::test_state_helpers::claimed_state;
use crate::domain::transitions;

/// Drive the claimant through the valid set at board indices 0, 7, 9 of
/// the replay-seed-1 opening board.
fn select_golden_set(state: &mut crate::domain::GameState, claimant: crate::domain::PlayerId) {
    for idx in [0, 7, 9] {
        let card = state.board[idx];
        transitions::select_card(state, claimant, card);
    }
}

#[test]
fn success_scores_and_replaces_in_place() {
    let (mut state, _rng, claimant) = claimed_state(2);
    assert_eq!(state.board[0].to_string(), "3-diamond-red-striped");
    assert_eq!(state.board[7].to_string(), "1-pill-red-open");
    assert_eq!(state.board[9].to_string(), "2-squiggle-red-solid");

    select_golden_set(&mut state, claimant);
    transitions::resolve_turn(&mut state);

    assert_eq!(state.players[0].score, 1);
    assert_eq!(state.board.len(), BOARD_SIZE);
    assert_eq!(state.deck.len(), 66);
    // Replacements are popped from the deck tail into the vacated slots,
    // in selection order; every other slot is untouched.
    assert_eq!(state.board[0].to_string(), "1-pill-green-solid");
    assert_eq!(state.board[7].to_string(), "3-squiggle-purple-striped");
    assert_eq!(state.board[9].to_string(), "3-pill-green-open");
    assert_eq!(state.board[1].to_string(), "2-squiggle-purple-striped");

    assert_eq!(state.message.as_deref(), Some("Set Found!"));
    assert!(state.active_player_id.is_none());
    assert!(state.selection.is_empty());
    assert!(state.animating.is_none());
    assert!(state.turn_expires_at.is_none());
}

#[test]
fn failure_penalizes_and_leaves_the_board_alone() {
    let (mut state, _rng, claimant) = claimed_state(2);
    state.players[0].score = 2;
    let board_before = state.board.clone();
    // Indices 0, 1, 2 of the replay-seed-1 board are not a set.
    for idx in [0, 1, 2] {
        let card = state.board[idx];
        transitions::select_card(&mut state, claimant, card);
    }
    assert_eq!(
        state.animating.as_ref().map(|a| a.outcome),
        Some(TurnOutcome::Failure)
    );

    transitions::resolve_turn(&mut state);
    assert_eq!(state.players[0].score, 1);
    assert_eq!(state.board, board_before);
    assert_eq!(state.deck.len(), 69);
    assert_eq!(state.message.as_deref(), Some("Invalid Set!"));
    assert!(state.active_player_id.is_none());
    assert!(state.selection.is_empty());
}

#[test]
fn failure_never_drives_scores_negative() {
    let (mut state, _rng, claimant) = claimed_state(2);
    assert_eq!(state.players[0].score, 0);
    for idx in [0, 1, 2] {
        let card = state.board[idx];
        transitions::select_card(&mut state, claimant, card);
    }
    transitions::resolve_turn(&mut state);
    assert_eq!(state.players[0].score, 0);
}

#[test]
fn oversized_board_shrinks_back_instead_of_refilling() {
    let (mut state, _rng, claimant) = claimed_state(2);
    transitions::deal_more(&mut state);
    assert_eq!(state.board.len(), BOARD_SIZE + 3);
    let deck_before = state.deck.len();

    select_golden_set(&mut state, claimant);
    transitions::resolve_turn(&mut state);

    // No draws: the three slots are removed and the board closes up.
    assert_eq!(state.board.len(), BOARD_SIZE);
    assert_eq!(state.deck.len(), deck_before);
    assert_eq!(state.players[0].score, 1);
    // The former index-1 card slid into slot 0.
    assert_eq!(state.board[0].to_string(), "2-squiggle-purple-striped");
}

#[test]
fn empty_deck_success_shrinks_the_board() {
    let (mut state, _rng, claimant) = claimed_state(2);
    state.deck.clear();
    select_golden_set(&mut state, claimant);
    transitions::resolve_turn(&mut state);
    assert_eq!(state.board.len(), BOARD_SIZE - 3);
    assert_eq!(state.players[0].score, 1);
}

#[test]
fn game_ends_when_deck_is_empty_and_no_set_remains() {
    let (mut state, _rng, claimant) = claimed_state(2);
    state.deck.clear();
    // Keep only the golden set on the board: once it is taken, nothing
    // remains to form another.
    let set_cards = [state.board[0], state.board[7], state.board[9]];
    state.board = set_cards.to_vec();
    for card in set_cards {
        transitions::select_card(&mut state, claimant, card);
    }
    transitions::resolve_turn(&mut state);
    assert!(state.board.is_empty());
    assert_eq!(state.status, Status::GameOver);
    assert_eq!(state.message.as_deref(), Some("Game Over!"));
}

#[test]
fn resolve_without_a_pending_outcome_is_a_no_op() {
    let (mut state, _rng, _claimant) = claimed_state(2);
    let before = state.clone();
    transitions::resolve_turn(&mut state);
    assert_eq!(state, before);
}

#[test]
fn claim_reopens_after_resolution() {
    let (mut state, _rng, claimant) = claimed_state(2);
    select_golden_set(&mut state, claimant);
    transitions::resolve_turn(&mut state);

    let second = state.players[1].id;
    transitions::claim_turn(
        &mut state,
        second,
        crate::domain::test_state_helpers::fixed_now(),
    );
    assert_eq!(state.active_player_id, Some(second));
    assert_eq!(state.message.as_deref(), Some("Player 2 called SET!"));
}
