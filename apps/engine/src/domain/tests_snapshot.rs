//! Unit tests for the public snapshot: derived signals and wire shape.

use serde_json::Value;

use crate::domain::snapshot::{claim_enabled, deal_more_enabled, select_enabled, snapshot};
use crate::domain::state::TurnOutcome;
use crate::domain::test_state_helpers::{claimed_state, fixed_now, lobby_state, playing_state};
use crate::domain::transitions;

#[test]
fn claim_signal_tracks_status_and_claimant() {
    let state = lobby_state(2);
    assert!(!claim_enabled(&state));

    let (state, _rng) = playing_state(2);
    assert!(claim_enabled(&state));

    let (state, _rng, _claimant) = claimed_state(2);
    assert!(!claim_enabled(&state));
}

#[test]
fn select_signal_is_claimant_only() {
    let (state, _rng, claimant) = claimed_state(2);
    assert!(select_enabled(&state, claimant));
    assert!(!select_enabled(&state, state.players[1].id));
}

#[test]
fn select_signal_drops_while_animating() {
    let (mut state, _rng, claimant) = claimed_state(2);
    for idx in [0, 7, 9] {
        let card = state.board[idx];
        transitions::select_card(&mut state, claimant, card);
    }
    assert!(!select_enabled(&state, claimant));
}

#[test]
fn deal_more_signal_tracks_remaining_deck() {
    let (mut state, _rng) = playing_state(2);
    assert!(deal_more_enabled(&state));
    state.deck.truncate(2);
    assert!(!deal_more_enabled(&state));
}

#[test]
fn snapshot_hides_the_deck_and_mirrors_the_board() {
    let (state, _rng) = playing_state(2);
    let snap = snapshot(&state);
    assert_eq!(snap.deck_count, 69);
    assert_eq!(snap.board.len(), 12);
    assert_eq!(snap.board[0].id, state.board[0].id());
    assert_eq!(snap.board[0].count, 3);
    assert_eq!(snap.board[0].shape, "diamond");
    assert_eq!(snap.players.len(), 2);
    assert!(snap.animating.is_none());
    assert!(snap.claim_enabled);
}

#[test]
fn snapshot_selection_preserves_toggle_order() {
    let (mut state, _rng, claimant) = claimed_state(2);
    let (a, b) = (state.board[5], state.board[2]);
    transitions::select_card(&mut state, claimant, a);
    transitions::select_card(&mut state, claimant, b);
    let snap = snapshot(&state);
    assert_eq!(snap.selection, vec![a.id(), b.id()]);
}

#[test]
fn snapshot_serializes_to_the_expected_wire_shape() {
    let (mut state, _rng, claimant) = claimed_state(2);
    for idx in [0, 7, 9] {
        let card = state.board[idx];
        transitions::select_card(&mut state, claimant, card);
    }
    let snap = snapshot(&state);
    let json: Value = serde_json::to_value(&snap).expect("snapshot serializes");

    assert_eq!(json["status"], "playing");
    assert_eq!(json["deck_count"], 69);
    assert_eq!(json["board"][0]["id"], "3-diamond-red-striped");
    assert_eq!(json["board"][0]["count"], 3);
    assert_eq!(json["players"][0]["position"], "bottom");
    assert_eq!(json["animating"]["outcome"], "success");
    assert_eq!(json["animating"]["card_ids"][1], "1-pill-red-open");
    // The clock stopped when the third card landed.
    assert_eq!(json["turn_expires_at"], Value::Null);
}

#[test]
fn expiry_serializes_as_rfc3339() {
    let (state, _rng, _claimant) = claimed_state(2);
    assert_eq!(state.turn_expires_at, Some(fixed_now() + crate::domain::rules::TURN_DURATION));
    let json: Value = serde_json::to_value(snapshot(&state)).expect("snapshot serializes");
    assert_eq!(json["turn_expires_at"], "2026-01-01T12:00:10Z");
}

#[test]
fn animating_is_omitted_from_json_when_absent() {
    let (state, _rng) = playing_state(2);
    let json: Value = serde_json::to_value(snapshot(&state)).expect("snapshot serializes");
    assert!(json.get("animating").is_none());
}

#[test]
fn snapshot_roundtrips_through_json() {
    let (mut state, _rng, claimant) = claimed_state(2);
    for idx in [0, 1, 2] {
        let card = state.board[idx];
        transitions::select_card(&mut state, claimant, card);
    }
    assert_eq!(
        state.animating.as_ref().map(|a| a.outcome),
        Some(TurnOutcome::Failure)
    );
    let snap = snapshot(&state);
    let text = serde_json::to_string(&snap).expect("serialize");
    let back: crate::domain::snapshot::GameSnapshot =
        serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, snap);
}
