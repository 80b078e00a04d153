//! Model kind discriminator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of record kinds the client knows how to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// A video game
    Game,
    /// A game with genres, platforms and release dates expanded
    GameExtended,
    /// A game genre
    Genre,
    /// Hardware or delivery network a game runs on
    Platform,
    /// A single news article
    Pulse,
    /// A news article with its source expanded
    PulseExtended,
    /// A news article source such as IGN
    PulseSource,
    /// A release date of a game on a platform
    ReleaseDate,
}

impl ModelKind {
    /// Every kind, in declaration order
    pub const ALL: [ModelKind; 8] = [
        ModelKind::Game,
        ModelKind::GameExtended,
        ModelKind::Genre,
        ModelKind::Platform,
        ModelKind::Pulse,
        ModelKind::PulseExtended,
        ModelKind::PulseSource,
        ModelKind::ReleaseDate,
    ];

    /// Name of the kind as used in logs and error messages
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Game => "Game",
            ModelKind::GameExtended => "GameExtended",
            ModelKind::Genre => "Genre",
            ModelKind::Platform => "Platform",
            ModelKind::Pulse => "Pulse",
            ModelKind::PulseExtended => "PulseExtended",
            ModelKind::PulseSource => "PulseSource",
            ModelKind::ReleaseDate => "ReleaseDate",
        }
    }

    /// IGDB v3 collection path serving this kind
    pub fn default_path(self) -> &'static str {
        match self {
            ModelKind::Game | ModelKind::GameExtended => "/games/",
            ModelKind::Genre => "/genres/",
            ModelKind::Platform => "/platforms/",
            ModelKind::Pulse | ModelKind::PulseExtended => "/pulses/",
            ModelKind::PulseSource => "/pulse_sources/",
            ModelKind::ReleaseDate => "/release_dates/",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = String;

    /// Accepts the kind name in any case, with or without underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| format!("unknown model kind: {s}"))
    }
}
