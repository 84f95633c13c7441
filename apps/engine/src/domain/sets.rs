//! The set predicate and board-wide set enumeration.

use crate::domain::cards_types::Card;

fn attribute_ok<T: PartialEq>(a: T, b: T, c: T) -> bool {
    // All equal or pairwise distinct; exactly two alike fails.
    (a == b && b == c) || (a != b && b != c && a != c)
}

/// Whether three cards form a valid set: for each of the four attributes,
/// the values are either all equal or all mutually distinct. Symmetric
/// under permutation of its arguments.
pub fn is_valid_set(a: Card, b: Card, c: Card) -> bool {
    attribute_ok(a.count, b.count, c.count)
        && attribute_ok(a.shape, b.shape, c.shape)
        && attribute_ok(a.color, b.color, c.color)
        && attribute_ok(a.shading, b.shading, c.shading)
}

/// Every unordered triple on the board satisfying `is_valid_set`, by
/// exhaustive enumeration in index order. No early exit: callers use this
/// both for existence checks and for counting.
pub fn find_sets(board: &[Card]) -> Vec<[Card; 3]> {
    let mut sets = Vec::new();
    for i in 0..board.len() {
        for j in (i + 1)..board.len() {
            for k in (j + 1)..board.len() {
                if is_valid_set(board[i], board[j], board[k]) {
                    sets.push([board[i], board[j], board[k]]);
                }
            }
        }
    }
    sets
}

/// The unique third card completing a set with the given pair.
///
/// For each attribute the completion is forced: repeat the shared value, or
/// take the one value the pair leaves out. Useful to tests and solvers.
pub fn completing_card(a: Card, b: Card) -> Card {
    fn third<T: Copy + PartialEq>(universe: [T; 3], a: T, b: T) -> T {
        if a == b {
            return a;
        }
        // Pairwise distinct: pick the member of the universe neither holds.
        universe
            .into_iter()
            .find(|&v| v != a && v != b)
            .unwrap_or(a)
    }

    Card {
        count: third(crate::domain::cards_types::Count::ALL, a.count, b.count),
        shape: third(crate::domain::cards_types::Shape::ALL, a.shape, b.shape),
        color: third(crate::domain::cards_types::Color::ALL, a.color, b.color),
        shading: third(
            crate::domain::cards_types::Shading::ALL,
            a.shading,
            b.shading,
        ),
    }
}
