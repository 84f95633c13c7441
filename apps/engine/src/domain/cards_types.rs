//! Core card types: the four attributes and the 81-card universe.

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Shape {
    Diamond,
    Squiggle,
    Pill,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Squiggle, Shape::Pill];

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Squiggle => "squiggle",
            Shape::Pill => "pill",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

impl Shading {
    pub const ALL: [Shading; 3] = [Shading::Solid, Shading::Striped, Shading::Open];

    pub fn as_str(self) -> &'static str {
        match self {
            Shading::Solid => "solid",
            Shading::Striped => "striped",
            Shading::Open => "open",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    pub fn as_u8(self) -> u8 {
        match self {
            Count::One => 1,
            Count::Two => 2,
            Count::Three => 3,
        }
    }
}

/// One of the 81 cards (3 × 3 × 3 × 3 attribute combinations).
///
/// A card's id is derived, never stored: the `Display` impl renders the
/// stable `"<count>-<shape>-<color>-<shading>"` token that external
/// consumers key on, and `FromStr` (see `cards_parsing`) accepts it back.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub count: Count,
    pub shape: Shape,
    pub color: Color,
    pub shading: Shading,
}

impl Card {
    /// The card's stable id token, e.g. `"2-diamond-red-striped"`.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.count.as_u8(),
            self.shape.as_str(),
            self.color.as_str(),
            self.shading.as_str()
        )
    }
}
