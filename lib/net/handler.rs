use crate::chess::{Color, Fen, Move};
use crate::net::ServerEvent;

/// Trait for types that react to [`ServerEvent`]s.
pub trait Handler {
    /// This client was assigned the pieces of a [`Color`].
    fn on_role_assigned(&mut self, side: Color);

    /// This client was assigned to watch the game.
    fn on_spectator_assigned(&mut self);

    /// The server sent a snapshot of the entire game.
    fn on_snapshot(&mut self, fen: Fen);

    /// The server relayed a [`Move`] accepted elsewhere.
    fn on_remote_move(&mut self, m: Move);

    /// Routes a [`ServerEvent`] to the matching handler.
    fn dispatch(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::PlayerRole(side) => self.on_role_assigned(side),
            ServerEvent::SpectatorRole => self.on_spectator_assigned(),
            ServerEvent::BoardState(fen) => self.on_snapshot(fen),
            ServerEvent::Move(m) => self.on_remote_move(m),
        }
    }
}
