use super::{unix_to_utc, Model, PulseSource};
use crate::endpoint::ModelKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news article
///
/// See <https://api-docs.igdb.com/#pulse>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pulse {
    /// Unique identifier of the article
    pub id: u64,
    /// Author according to the publisher
    pub author: Option<String>,
    /// URL of the main image
    pub image: Option<String>,
    /// When the third party first published it (unix seconds)
    pub published_at: Option<i64>,
    /// Publisher reference id
    pub pulse_source: Option<u64>,
    /// Brief extract of the article
    pub summary: Option<String>,
    /// Tag numbers of related entities
    pub tags: Vec<u64>,
    /// Title of the article
    pub title: Option<String>,
    /// Pulse URL reference id
    pub website: Option<u64>,
}

impl Pulse {
    /// Publication time as a UTC timestamp
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.published_at)
    }
}

impl Model for Pulse {
    const KIND: ModelKind = ModelKind::Pulse;
}

/// A news article with its source expanded
///
/// Request with a selector such as `*,pulse_source.*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseExtended {
    pub id: u64,
    pub author: Option<String>,
    pub image: Option<String>,
    pub published_at: Option<i64>,
    pub pulse_source: Option<PulseSource>,
    pub summary: Option<String>,
    pub tags: Vec<u64>,
    pub title: Option<String>,
    pub website: Option<u64>,
}

impl PulseExtended {
    /// Publication time as a UTC timestamp
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.published_at)
    }
}

impl Model for PulseExtended {
    const KIND: ModelKind = ModelKind::PulseExtended;
}
