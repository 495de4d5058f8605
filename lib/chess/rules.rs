use crate::chess::{Fen, IllegalMove, IllegalPosition, Move, Placement, Position};
use tracing::instrument;

/// Trait for types that hold the canonical state of a game of chess.
#[cfg_attr(test, mockall::automock)]
pub trait Rules {
    /// The current [`Placement`] of pieces on the board.
    fn placement(&self) -> Placement;

    /// Validates a [`Move`] and applies it if legal.
    ///
    /// The state must be left untouched if the move is rejected.
    fn play(&mut self, m: Move) -> Result<(), IllegalMove>;

    /// Replaces the entire state by the one described by [`Fen`].
    ///
    /// The state must be left untouched if the snapshot is rejected.
    fn load(&mut self, fen: Fen) -> Result<(), IllegalPosition>;
}

impl Rules for Position {
    #[inline]
    fn placement(&self) -> Placement {
        Position::placement(self)
    }

    #[instrument(level = "trace", skip(self), err)]
    fn play(&mut self, m: Move) -> Result<(), IllegalMove> {
        Position::play(self, m)
    }

    #[instrument(level = "trace", skip(self), err)]
    fn load(&mut self, fen: Fen) -> Result<(), IllegalPosition> {
        *self = fen.try_into()?;
        Ok(())
    }
}
