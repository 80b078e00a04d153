use super::Model;
use crate::endpoint::ModelKind;
use serde::{Deserialize, Serialize};

/// A news article source such as IGN
///
/// See <https://api-docs.igdb.com/#pulse-source>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseSource {
    pub id: u64,
    /// Set when the source only covers a single game
    pub game: Option<u64>,
    /// Name of the publisher
    pub name: Option<String>,
}

impl Model for PulseSource {
    const KIND: ModelKind = ModelKind::PulseSource;
}
