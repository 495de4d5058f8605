use derive_more::{DebugCustom, Display, Error, From};
use shakmaty as sm;
use std::{char::ParseCharError, num::TryFromIntError, str::FromStr};

#[cfg(test)]
use proptest::sample::select;

/// Denotes a row on the chess board.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "{}", self)]
#[display(fmt = "{}", _0)]
pub struct Rank(#[cfg_attr(test, strategy(select(sm::Rank::ALL.to_vec())))] sm::Rank);

impl Rank {
    /// This rank's index in the range (0..=7), the first rank being 0.
    #[inline]
    pub fn index(&self) -> u8 {
        u8::from(self.0)
    }

    /// Returns an iterator over [`Rank`]s ordered by [index][`Rank::index`].
    #[inline]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        sm::Rank::ALL.into_iter().map(Rank)
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse rank")]
pub enum ParseRankError {
    ParseCharError(ParseCharError),
    InvalidRank(InvalidRank),
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<char>()?.try_into()?)
    }
}

/// The reason why converting [`Rank`] from a digit failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected digit in the range `('1'..='8')`")]
pub struct InvalidRank;

impl TryFrom<char> for Rank {
    type Error = InvalidRank;

    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        sm::Rank::from_char(c).map(Rank).ok_or(InvalidRank)
    }
}

/// The reason why converting [`Rank`] from index failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected integer in the range `(0..=7)`")]
pub struct RankOutOfRange;

impl From<TryFromIntError> for RankOutOfRange {
    #[inline]
    fn from(_: TryFromIntError) -> Self {
        RankOutOfRange
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankOutOfRange;

    #[inline]
    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Ok(Rank(i.try_into()?))
    }
}

#[doc(hidden)]
impl From<sm::Rank> for Rank {
    #[inline]
    fn from(r: sm::Rank) -> Self {
        Rank(r)
    }
}

#[doc(hidden)]
impl From<Rank> for sm::Rank {
    #[inline]
    fn from(r: Rank) -> Self {
        r.0
    }
}
