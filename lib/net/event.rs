use crate::chess::{Color, Fen, Move};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The reason why decoding an event failed.
#[derive(Debug, Display, Error, From)]
#[display(fmt = "failed to decode event")]
pub struct DecodeEventError(serde_json::Error);

/// Events pushed by the game server.
///
/// Each event is a JSON object on a line of its own, e.g.
/// `{"event":"move","data":{"from":"e7","to":"e5"}}`.
#[derive(Debug, Display, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// This client plays the pieces of a [`Color`].
    #[display(fmt = "{}", "serde_json::to_string(self).unwrap()")]
    PlayerRole(Color),
    /// This client only watches the game.
    #[display(fmt = "{}", "serde_json::to_string(self).unwrap()")]
    SpectatorRole,
    /// A snapshot of the entire game.
    #[display(fmt = "{}", "serde_json::to_string(self).unwrap()")]
    BoardState(Fen),
    /// A [`Move`] accepted by the server.
    #[display(fmt = "{}", "serde_json::to_string(self).unwrap()")]
    Move(Move),
}

impl FromStr for ServerEvent {
    type Err = DecodeEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Events sent to the game server.
#[derive(Debug, Display, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// A [`Move`] submitted for broadcast.
    #[display(fmt = "{}", "serde_json::to_string(self).unwrap()")]
    Move(Move),
}

impl FromStr for ClientEvent {
    type Err = DecodeEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}
