//! The single-writer game table.
//!
//! Exactly one intent is processed to completion at a time: one mutex
//! around the whole state and the generator is the only mutual-exclusion
//! domain, so no partial transition is ever observable. Two external
//! actors drive a table: the intent dispatcher (user actions) and a
//! countdown ticker calling `tick_at`. The ticker is fire-and-forget and
//! inherently racy against resolution; `expire_turn`'s guard absorbs a
//! stale firing unconditionally.

use parking_lot::Mutex;
use time::OffsetDateTime;

use crate::config::GameConfig;
use crate::domain::deck::GameRng;
use crate::domain::snapshot::{self, GameSnapshot};
use crate::domain::state::{GameState, PlayerId};
use crate::domain::transitions::{self, Intent};

struct TableInner {
    state: GameState,
    rng: GameRng,
}

/// Serialized owner of one game's canonical state.
pub struct GameTable {
    inner: Mutex<TableInner>,
}

impl GameTable {
    /// Build a table from startup configuration. A seeded config replays
    /// deterministically; an unseeded one draws the generator start state
    /// from OS entropy.
    pub fn new(config: &GameConfig) -> Self {
        let rng = match &config.seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            inner: Mutex::new(TableInner {
                state: GameState::new(),
                rng,
            }),
        }
    }

    /// Process one intent to completion and return the resulting snapshot.
    pub fn dispatch(&self, intent: Intent) -> GameSnapshot {
        self.dispatch_at(intent, OffsetDateTime::now_utc())
    }

    /// As `dispatch`, with an explicit clock for deterministic tests.
    pub fn dispatch_at(&self, intent: Intent, now: OffsetDateTime) -> GameSnapshot {
        let mut inner = self.inner.lock();
        let TableInner { state, rng } = &mut *inner;
        transitions::apply(state, rng, now, &intent);
        tracing::debug!(?intent, status = ?state.status, "intent applied");
        snapshot::snapshot(state)
    }

    /// Countdown ticker entry point: expire the current claim if its
    /// deadline has passed. Returns the new snapshot when an expiry fired.
    pub fn tick(&self) -> Option<GameSnapshot> {
        self.tick_at(OffsetDateTime::now_utc())
    }

    /// As `tick`, with an explicit clock for deterministic tests.
    pub fn tick_at(&self, now: OffsetDateTime) -> Option<GameSnapshot> {
        let mut inner = self.inner.lock();
        let due = matches!(inner.state.turn_expires_at, Some(deadline) if now >= deadline);
        if !due {
            return None;
        }
        let TableInner { state, rng } = &mut *inner;
        transitions::apply(state, rng, now, &Intent::ExpireTurn);
        tracing::debug!(status = ?state.status, "turn expired");
        Some(snapshot::snapshot(state))
    }

    /// Read-only snapshot without applying an intent.
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::snapshot(&self.inner.lock().state)
    }

    /// Derived signal: may this player select cards right now?
    pub fn select_enabled(&self, player_id: PlayerId) -> bool {
        snapshot::select_enabled(&self.inner.lock().state, player_id)
    }
}
