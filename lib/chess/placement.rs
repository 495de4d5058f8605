use crate::chess::{Piece, Square};
use std::ops::Index;

/// The piece placement on the board.
///
/// Squares are laid out row-major, row 0 being the eighth rank and column 0 the `a` file.
/// This type does not validate whether the placement it holds is valid
/// according to any set of chess rules.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    pub squares: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Placement {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Placement>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        proptest::collection::vec(any::<Option<Piece>>(), 64)
            .prop_map(|v| {
                let mut placement = Placement::default();

                placement
                    .squares
                    .iter_mut()
                    .flatten()
                    .zip(v)
                    .for_each(|(s, p)| *s = p);

                placement
            })
            .boxed()
    }
}

impl Index<Square> for Placement {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, s: Square) -> &Self::Output {
        let (row, col) = s.coords();
        &self.squares[row as usize][col as usize]
    }
}
