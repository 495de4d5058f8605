use derive_more::{Display, Error};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use shakmaty as sm;
use std::str::FromStr;

/// A snapshot of the game in [Forsyth–Edwards Notation].
///
/// This type only guarantees the notation is well formed,
/// whether it describes a legal position is decided by [`Position`][`crate::chess::Position`].
///
/// [Forsyth–Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
#[derive(Debug, Display, Clone, Eq, PartialEq)]
#[display(fmt = "{}", _0)]
pub struct Fen(sm::fen::Fen);

/// The reason why parsing [`Fen`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse fen")]
pub struct ParseFenError;

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Fen).map_err(|_| ParseFenError)
    }
}

impl Serialize for Fen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fen {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[doc(hidden)]
impl From<sm::fen::Fen> for Fen {
    #[inline]
    fn from(fen: sm::fen::Fen) -> Self {
        Fen(fen)
    }
}

#[doc(hidden)]
impl From<Fen> for sm::fen::Fen {
    #[inline]
    fn from(fen: Fen) -> Self {
        fen.0
    }
}
