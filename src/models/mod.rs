//! Domain models
//!
//! Typed shapes of the IGDB v3 records the client decodes. Every field is
//! optional on the wire because the caller's field selector decides what the
//! server returns, so all models tolerate missing fields.
//!
//! Each model implements [`Model`], which binds it to a [`ModelKind`] at
//! compile time. The kind selects the endpoint; the type selects the decode
//! target.

mod game;
mod genre;
mod platform;
mod pulse;
mod pulse_source;
mod release_date;

pub use game::{Game, GameExtended};
pub use genre::Genre;
pub use platform::Platform;
pub use pulse::{Pulse, PulseExtended};
pub use pulse_source::PulseSource;
pub use release_date::{ReleaseDate, ReleaseDateCategory};

use crate::endpoint::ModelKind;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record type that can be fetched from an IGDB endpoint
pub trait Model: DeserializeOwned + Serialize + Send + 'static {
    /// The kind used to resolve this model's endpoint
    const KIND: ModelKind;
}

/// Convert a unix timestamp (seconds) into a UTC datetime
pub(crate) fn unix_to_utc(seconds: Option<i64>) -> Option<DateTime<Utc>> {
    seconds.and_then(|s| DateTime::from_timestamp(s, 0))
}
