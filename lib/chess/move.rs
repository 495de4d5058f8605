use crate::chess::{ParsePromotionError, ParseSquareError, Promotion, Square};
use derive_more::{DebugCustom, Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// On the wire a move is an object `{"from": "e2", "to": "e4", "promotion": "q"}`,
/// where `promotion` is optional.
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}{_1}{_2}")]
#[serde(from = "Wire", into = "Wire")]
pub struct Move(pub Square, pub Square, pub Promotion);

impl Move {
    /// The source [`Square`].
    #[inline]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The [`Promotion`] specifier.
    #[inline]
    pub fn promotion(&self) -> Promotion {
        self.2
    }
}

#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct Wire {
    from: Square,
    to: Square,
    #[serde(default, skip_serializing_if = "Promotion::is_none")]
    promotion: Promotion,
}

impl From<Wire> for Move {
    #[inline]
    fn from(w: Wire) -> Self {
        Move(w.from, w.to, w.promotion)
    }
}

impl From<Move> for Wire {
    #[inline]
    fn from(m: Move) -> Self {
        Wire {
            from: m.whence(),
            to: m.whither(),
            promotion: m.promotion(),
        }
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse move")]
pub enum ParseMoveError {
    #[from(ignore)]
    InvalidFromSquare(ParseSquareError),
    #[from(ignore)]
    InvalidToSquare(ParseSquareError),
    InvalidPromotion(ParsePromotionError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseMoveError::*;

        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        let j = s.char_indices().nth(4).map_or_else(|| s.len(), |(i, _)| i);

        Ok(Move(
            s[..i].parse().map_err(InvalidFromSquare)?,
            s[i..j].parse().map_err(InvalidToSquare)?,
            s[j..].parse()?,
        ))
    }
}
