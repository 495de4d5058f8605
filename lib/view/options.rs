use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How pieces are drawn on a text terminal.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    /// Unicode figurines, e.g. `♔`.
    #[default]
    #[display(fmt = "figurine")]
    Figurine,

    /// FEN letters, e.g. `K`.
    #[display(fmt = "letter")]
    Letter,
}

/// Configuration for drawing the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, rename = "options", default)]
pub struct Options {
    /// How pieces are drawn.
    pub glyphs: Glyphs,

    /// Whether to label files and ranks along the edges of the board.
    pub coordinates: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            coordinates: true,
        }
    }
}

/// The reason why parsing [`Options`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse board options")]
pub struct ParseOptionsError(ron::de::SpannedError);

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
