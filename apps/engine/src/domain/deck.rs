//! Deterministic deck generation and shuffling.
//!
//! Replay determinism is a contract here: consumers replay literal seeds and
//! assert literal downstream outcomes, so the generator algorithm and its
//! constants are fixed. The generator is an owned value threaded through
//! deck construction, never ambient process state, so isolated tables can
//! coexist and tests never interfere.

use rand::Rng;

use crate::domain::cards_types::{Card, Color, Count, Shading, Shape};
use crate::domain::rules::DECK_SIZE;

/// Seed accepted at startup, as text (e.g. from a URL parameter) or a raw
/// 32-bit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSeed {
    Text(String),
    Number(u32),
}

impl GameSeed {
    /// Fold the seed into the generator's 32-bit start state.
    ///
    /// Text seeds use 32-bit FNV-1a (offset basis 0x811c9dc5, prime
    /// 0x01000193), mixing every UTF-16 code unit in order, so non-BMP
    /// characters fold as their surrogate pair and every client folding
    /// the same string agrees. Numeric seeds are used as-is. The fold is
    /// order-sensitive: "ab" and "ba" are different games.
    pub fn fold(&self) -> u32 {
        match self {
            GameSeed::Number(n) => *n,
            GameSeed::Text(s) => {
                let mut h: u32 = 0x811c_9dc5;
                for unit in s.encode_utf16() {
                    h ^= u32::from(unit);
                    h = h.wrapping_mul(0x0100_0193);
                }
                h
            }
        }
    }
}

impl From<&str> for GameSeed {
    fn from(s: &str) -> Self {
        GameSeed::Text(s.to_string())
    }
}

impl From<String> for GameSeed {
    fn from(s: String) -> Self {
        GameSeed::Text(s)
    }
}

impl From<u32> for GameSeed {
    fn from(n: u32) -> Self {
        GameSeed::Number(n)
    }
}

/// Deterministic shuffle generator.
///
/// A 32-bit linear congruential generator with the Numerical Recipes
/// constants: `state = (1664525 * state + 1013904223) mod 2^32`. Not
/// statistically strong, but fixed forever: the exact sequence is part of
/// the replay contract, shared with every client that folds the same seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    state: u64, // low 32 bits significant
}

impl GameRng {
    pub fn seeded(seed: &GameSeed) -> Self {
        Self {
            state: u64::from(seed.fold()),
        }
    }

    /// Seed from OS entropy for casual (non-replayable) games.
    pub fn from_entropy() -> Self {
        Self {
            state: u64::from(rand::rng().random::<u32>()),
        }
    }

    fn step(&mut self) -> u64 {
        self.state = (1664525u64.wrapping_mul(self.state) + 1013904223) & 0xFFFF_FFFF;
        self.state
    }

    /// Uniform index in `0..bound` via the high bits of the next state.
    ///
    /// Equivalent to `floor((state / 2^32) * bound)`, which is exact for
    /// any `bound <= 81`, so clients computing the same draw in float
    /// arithmetic agree bit for bit.
    fn next_index(&mut self, bound: usize) -> usize {
        let x = self.step();
        ((x * bound as u64) >> 32) as usize
    }
}

/// The 81 combinations in canonical order: count outermost, then shape,
/// color, shading. Shuffles key off this order, so it is as much a part of
/// the replay contract as the generator.
fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for count in Count::ALL {
        for shape in Shape::ALL {
            for color in Color::ALL {
                for shading in Shading::ALL {
                    deck.push(Card {
                        count,
                        shape,
                        color,
                        shading,
                    });
                }
            }
        }
    }
    deck
}

/// Fisher-Yates shuffle from the top index down.
fn shuffle(deck: &mut [Card], rng: &mut GameRng) {
    for i in (1..deck.len()).rev() {
        let j = rng.next_index(i + 1);
        deck.swap(i, j);
    }
}

/// Build the full 81-card universe exactly once and shuffle it with the
/// given generator. Output is always a permutation of the universe; an
/// identical seed yields a byte-identical sequence.
pub fn generate_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck();
    shuffle(&mut deck, rng);
    deck
}
