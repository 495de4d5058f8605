use derive_more::{DebugCustom, Display, Error, From};
use shakmaty as sm;
use std::{char::ParseCharError, num::TryFromIntError, str::FromStr};

#[cfg(test)]
use proptest::sample::select;

/// Denotes a column on the chess board.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "{}", self)]
#[display(fmt = "{}", _0)]
pub struct File(#[cfg_attr(test, strategy(select(sm::File::ALL.to_vec())))] sm::File);

impl File {
    /// This file's index in the range (0..=7), `a` being 0.
    #[inline]
    pub fn index(&self) -> u8 {
        u8::from(self.0)
    }

    /// Returns an iterator over [`File`]s ordered by [index][`File::index`].
    #[inline]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        sm::File::ALL.into_iter().map(File)
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse file")]
pub enum ParseFileError {
    ParseCharError(ParseCharError),
    InvalidFile(InvalidFile),
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<char>()?.try_into()?)
    }
}

/// The reason why converting [`File`] from a letter failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected lower case letter in the range `('a'..='h')`")]
pub struct InvalidFile;

impl TryFrom<char> for File {
    type Error = InvalidFile;

    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        sm::File::from_char(c).map(File).ok_or(InvalidFile)
    }
}

/// The reason why converting [`File`] from index failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected integer in the range `(0..=7)`")]
pub struct FileOutOfRange;

impl From<TryFromIntError> for FileOutOfRange {
    #[inline]
    fn from(_: TryFromIntError) -> Self {
        FileOutOfRange
    }
}

impl TryFrom<u8> for File {
    type Error = FileOutOfRange;

    #[inline]
    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Ok(File(i.try_into()?))
    }
}

#[doc(hidden)]
impl From<sm::File> for File {
    #[inline]
    fn from(f: sm::File) -> Self {
        File(f)
    }
}

#[doc(hidden)]
impl From<File> for sm::File {
    #[inline]
    fn from(f: File) -> Self {
        f.0
    }
}
