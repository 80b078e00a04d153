use super::Model;
use crate::endpoint::ModelKind;
use serde::{Deserialize, Serialize};

/// A game genre
///
/// See <https://api-docs.igdb.com/#genre>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    /// Unique identifier of the genre
    pub id: u64,
    /// Name of the genre
    pub name: Option<String>,
    /// URL-safe, unique, lower-case version of the name
    pub slug: Option<String>,
}

impl Model for Genre {
    const KIND: ModelKind = ModelKind::Genre;
}
