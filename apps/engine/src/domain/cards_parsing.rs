//! Card parsing from id tokens (e.g., "2-diamond-red-striped")

use std::str::FromStr;

use super::cards_types::{Card, Color, Count, Shading, Shape};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let count_tok = parts.next().ok_or_else(|| parse_error(s))?;
        let shape_tok = parts.next().ok_or_else(|| parse_error(s))?;
        let color_tok = parts.next().ok_or_else(|| parse_error(s))?;
        let shading_tok = parts.next().ok_or_else(|| parse_error(s))?;
        if parts.next().is_some() {
            return Err(parse_error(s));
        }

        let count = match count_tok {
            "1" => Count::One,
            "2" => Count::Two,
            "3" => Count::Three,
            _ => return Err(parse_error(s)),
        };
        let shape = match shape_tok {
            "diamond" => Shape::Diamond,
            "squiggle" => Shape::Squiggle,
            "pill" => Shape::Pill,
            _ => return Err(parse_error(s)),
        };
        let color = match color_tok {
            "red" => Color::Red,
            "green" => Color::Green,
            "purple" => Color::Purple,
            _ => return Err(parse_error(s)),
        };
        let shading = match shading_tok {
            "solid" => Shading::Solid,
            "striped" => Shading::Striped,
            "open" => Shading::Open,
            _ => return Err(parse_error(s)),
        };

        Ok(Card {
            count,
            shape,
            color,
            shading,
        })
    }
}

/// Non-panicking helper to parse id tokens into Card instances.
/// Returns Result<Vec<Card>, DomainError> if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
