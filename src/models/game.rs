use super::{Genre, Model, Platform, ReleaseDate};
use crate::endpoint::ModelKind;
use serde::{Deserialize, Serialize};

/// A video game
///
/// See <https://api-docs.igdb.com/#game>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    /// Unique identifier of the game
    pub id: u64,
    /// Name of the game
    pub name: Option<String>,
    /// URL-safe, unique, lower-case version of the name
    pub slug: Option<String>,
    /// Description of the game
    pub summary: Option<String>,
    /// Cover reference id
    pub cover: Option<u64>,
    /// Genre ids
    pub genres: Vec<u64>,
    /// Platform ids
    pub platforms: Vec<u64>,
    /// Release date ids
    pub release_dates: Vec<u64>,
    /// Time-to-beat reference id
    pub time_to_beat: Option<u64>,
}

impl Model for Game {
    const KIND: ModelKind = ModelKind::Game;
}

/// A game with its genres, platforms and release dates expanded
///
/// Served from the same endpoint as [`Game`]; request it with a selector
/// that expands the nested objects, e.g. `*,genres.*,platforms.*,release_dates.*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameExtended {
    pub id: u64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub cover: Option<u64>,
    pub genres: Vec<Genre>,
    pub platforms: Vec<Platform>,
    pub release_dates: Vec<ReleaseDate>,
    pub time_to_beat: Option<u64>,
}

impl Model for GameExtended {
    const KIND: ModelKind = ModelKind::GameExtended;
}
