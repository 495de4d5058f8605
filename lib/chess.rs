mod color;
mod fen;
mod file;
mod r#move;
mod piece;
mod placement;
mod position;
mod promotion;
mod rank;
mod role;
mod rules;
mod square;

pub use color::*;
pub use fen::*;
pub use file::*;
pub use piece::*;
pub use placement::*;
pub use position::*;
pub use promotion::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use rules::*;
pub use square::*;
