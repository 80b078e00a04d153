use super::Model;
use crate::endpoint::ModelKind;
use serde::{Deserialize, Serialize};

/// The hardware used to run a game, or a game delivery network
///
/// See <https://api-docs.igdb.com/#platform>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub id: u64,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl Model for Platform {
    const KIND: ModelKind = ModelKind::Platform;
}
