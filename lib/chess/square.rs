use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{DebugCustom, Display, Error, From};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use shakmaty as sm;
use std::str::FromStr;

#[cfg(test)]
use proptest::sample::select;

/// A square of the board.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "{}", self)]
#[display(fmt = "{}", _0)]
pub struct Square(#[cfg_attr(test, strategy(select(sm::Square::ALL.to_vec())))] sm::Square);

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline]
    pub fn new(f: File, r: Rank) -> Self {
        Square(sm::Square::from_coords(f.into(), r.into()))
    }

    /// This square's [`File`].
    #[inline]
    pub fn file(&self) -> File {
        self.0.file().into()
    }

    /// This square's [`Rank`].
    #[inline]
    pub fn rank(&self) -> Rank {
        self.0.rank().into()
    }

    /// Constructs [`Square`] from its `(row, col)` coordinates on the grid.
    ///
    /// Row 0 is the eighth rank, column 0 is the `a` file.
    /// Returns `None` if either coordinate is not in the range (0..=7).
    #[inline]
    pub fn from_coords(row: u8, col: u8) -> Option<Self> {
        let rank = Rank::try_from(7u8.checked_sub(row)?).ok()?;
        let file = File::try_from(col).ok()?;
        Some(Square::new(file, rank))
    }

    /// This square's `(row, col)` coordinates on the grid.
    #[inline]
    pub fn coords(&self) -> (u8, u8) {
        (7 - self.rank().index(), self.file().index())
    }

    /// Returns an iterator over all [`Square`]s in grid order.
    ///
    /// The iteration is row-major, from `a8` to `h1`.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Self> {
        Rank::iter()
            .rev()
            .flat_map(|r| File::iter().map(move |f| Square::new(f, r)))
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse square")]
pub enum ParseSquareError {
    InvalidFile(ParseFileError),
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[doc(hidden)]
impl From<sm::Square> for Square {
    #[inline]
    fn from(s: sm::Square) -> Self {
        Square(s)
    }
}

#[doc(hidden)]
impl From<Square> for sm::Square {
    #[inline]
    fn from(s: Square) -> Self {
        s.0
    }
}
