use crate::chess::{Color, Piece};
use derive_more::Display;

/// The perspective under which the board is rendered and interacted with.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Viewer {
    /// Plays the pieces of a [`Color`].
    #[display(fmt = "{} player", _0)]
    Player(Color),

    /// Only watches the game.
    #[default]
    #[display(fmt = "spectator")]
    Spectator,
}

impl Viewer {
    /// Whether this viewer may drag a [`Piece`].
    #[inline]
    pub fn can_drag(&self, p: Piece) -> bool {
        matches!(*self, Viewer::Player(side) if side == p.color())
    }

    /// Whether the board is shown rotated, so black's home rank is nearest this viewer.
    #[inline]
    pub fn is_flipped(&self) -> bool {
        *self == Viewer::Player(Color::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn players_can_drag_only_their_own_pieces(side: Color, p: Piece) {
        assert_eq!(Viewer::Player(side).can_drag(p), p.color() == side);
    }

    #[proptest]
    fn spectators_cannot_drag_any_piece(p: Piece) {
        assert!(!Viewer::Spectator.can_drag(p));
    }

    #[proptest]
    fn only_black_player_sees_the_board_flipped(v: Viewer) {
        assert_eq!(v.is_flipped(), v == Viewer::Player(Color::Black));
    }

    #[test]
    fn viewer_is_a_spectator_until_assigned_a_side() {
        assert_eq!(Viewer::default(), Viewer::Spectator);
    }
}
