mod board;
mod glyph;
mod options;
mod tree;
mod viewer;

pub use board::*;
pub use glyph::*;
pub use options::*;
pub use tree::*;
pub use viewer::*;
