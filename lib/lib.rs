/// Chess domain types.
pub mod chess;
/// Messages exchanged with the game server.
pub mod net;
/// The interactive chessboard.
pub mod view;
