mod channel;
mod event;
mod handler;

pub use channel::*;
pub use event::*;
pub use handler::*;
