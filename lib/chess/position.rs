use crate::chess::{Color, Fen, Move, Piece, Placement, Square};
use derive_more::{DebugCustom, Display, Error};
use shakmaty as sm;

/// Represents an illegal [`Move`] in a given [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "move `{_0}` is illegal in this position")]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// The reason why the position represented by the FEN string is illegal.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalPosition {
    #[display(fmt = "at least one side has no king")]
    MissingKing,
    #[display(fmt = "at least one side has multiple kings")]
    TooManyKings,
    #[display(fmt = "there are pawns on the back-rank")]
    PawnsOnBackRank,
    #[display(fmt = "the player in check is not to move")]
    OppositeCheck,
    #[display(fmt = "invalid en passant square; wrong rank, occupied, or missing pushed pawn")]
    InvalidEnPassantSquare,
    #[display(fmt = "invalid castling rights")]
    InvalidCastlingRights,
    #[display(fmt = "no sequence of legal moves can reach this position")]
    Other,
}

#[doc(hidden)]
impl From<sm::PositionError<sm::Chess>> for IllegalPosition {
    #[inline]
    fn from(e: sm::PositionError<sm::Chess>) -> Self {
        let kinds = e.kinds();

        if kinds.contains(sm::PositionErrorKinds::MISSING_KING) {
            IllegalPosition::MissingKing
        } else if kinds.contains(sm::PositionErrorKinds::TOO_MANY_KINGS) {
            IllegalPosition::TooManyKings
        } else if kinds.contains(sm::PositionErrorKinds::PAWNS_ON_BACKRANK) {
            IllegalPosition::PawnsOnBackRank
        } else if kinds.contains(sm::PositionErrorKinds::OPPOSITE_CHECK) {
            IllegalPosition::OppositeCheck
        } else if kinds.contains(sm::PositionErrorKinds::INVALID_EP_SQUARE) {
            IllegalPosition::InvalidEnPassantSquare
        } else if kinds.contains(sm::PositionErrorKinds::INVALID_CASTLING_RIGHTS) {
            IllegalPosition::InvalidCastlingRights
        } else {
            IllegalPosition::Other
        }
    }
}

/// The current position on the chess board.
///
/// This type guarantees that it only holds legal positions.
#[derive(DebugCustom, Display, Default, Clone, Eq, PartialEq)]
#[debug(fmt = "Position({self})")]
#[display(fmt = "{}", "self.fen()")]
pub struct Position(sm::Chess);

impl Position {
    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        sm::Position::turn(&self.0).into()
    }

    /// This position's [`Fen`] representation.
    #[inline]
    pub fn fen(&self) -> Fen {
        sm::fen::Fen::from_position(self.0.clone(), sm::EnPassantMode::Legal).into()
    }

    /// The current [`Placement`] of pieces on the board.
    #[inline]
    pub fn placement(&self) -> Placement {
        let mut placement = Placement::default();

        for s in Square::iter() {
            let (row, col) = s.coords();
            placement.squares[row as usize][col as usize] = self[s];
        }

        placement
    }

    /// Play a [`Move`] if legal in this position.
    ///
    /// Pawns reaching the last rank are promoted to a queen unless the move says otherwise,
    /// the promotion specifier is ignored for all other moves.
    #[inline]
    pub fn play(&mut self, m: Move) -> Result<(), IllegalMove> {
        let from = sm::Square::from(m.whence());
        let to = sm::Square::from(m.whither());

        let promotion = match sm::Position::board(&self.0).role_at(from) {
            Some(sm::Role::Pawn) if to.rank() == sm::Rank::First || to.rank() == sm::Rank::Eighth => {
                Option::<sm::Role>::from(m.promotion()).or(Some(sm::Role::Queen))
            }

            _ => None,
        };

        let uci = sm::uci::Uci::Normal {
            from,
            to,
            promotion,
        };

        match uci.to_move(&self.0) {
            Ok(vm) => {
                sm::Position::play_unchecked(&mut self.0, &vm);
                Ok(())
            }

            Err(_) => Err(IllegalMove(m)),
        }
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl std::ops::Index<Square> for Position {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, s: Square) -> &Self::Output {
        use crate::chess::{Color::*, Role::*};
        match sm::Position::board(&self.0)
            .piece_at(s.into())
            .map(Piece::from)
        {
            Some(Piece(White, Pawn)) => &Some(Piece(White, Pawn)),
            Some(Piece(White, Knight)) => &Some(Piece(White, Knight)),
            Some(Piece(White, Bishop)) => &Some(Piece(White, Bishop)),
            Some(Piece(White, Rook)) => &Some(Piece(White, Rook)),
            Some(Piece(White, Queen)) => &Some(Piece(White, Queen)),
            Some(Piece(White, King)) => &Some(Piece(White, King)),
            Some(Piece(Black, Pawn)) => &Some(Piece(Black, Pawn)),
            Some(Piece(Black, Knight)) => &Some(Piece(Black, Knight)),
            Some(Piece(Black, Bishop)) => &Some(Piece(Black, Bishop)),
            Some(Piece(Black, Rook)) => &Some(Piece(Black, Rook)),
            Some(Piece(Black, Queen)) => &Some(Piece(Black, Queen)),
            Some(Piece(Black, King)) => &Some(Piece(Black, King)),
            None => &None,
        }
    }
}

impl TryFrom<Fen> for Position {
    type Error = IllegalPosition;

    #[inline]
    fn try_from(fen: Fen) -> Result<Self, Self::Error> {
        let fen = sm::fen::Fen::from(fen);
        Ok(Position(fen.into_position(sm::CastlingMode::Standard)?))
    }
}
