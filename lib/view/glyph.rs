use crate::chess::{Color, Piece, Role};

/// The Unicode figurine of a [`Piece`].
#[inline]
pub fn glyph(p: Piece) -> &'static str {
    match p {
        Piece(Color::White, Role::Pawn) => "♙",
        Piece(Color::White, Role::Knight) => "♘",
        Piece(Color::White, Role::Bishop) => "♗",
        Piece(Color::White, Role::Rook) => "♖",
        Piece(Color::White, Role::Queen) => "♕",
        Piece(Color::White, Role::King) => "♔",
        Piece(Color::Black, Role::Pawn) => "♟",
        Piece(Color::Black, Role::Knight) => "♞",
        Piece(Color::Black, Role::Bishop) => "♝",
        Piece(Color::Black, Role::Rook) => "♜",
        Piece(Color::Black, Role::Queen) => "♛",
        Piece(Color::Black, Role::King) => "♚",
    }
}
