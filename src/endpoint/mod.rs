//! Endpoint resolution module
//!
//! Maps a model kind to the IGDB collection path it is served from.
//!
//! # Overview
//!
//! The resolver is plain configuration data: an [`EndpointTable`] is built
//! once, owned by the client, and only read afterwards. Several kinds may
//! share a path (e.g. `Game` and `GameExtended` both live under `/games/`);
//! lookup is always by kind, never by path.

mod table;
mod types;

pub use table::{EndpointTable, EndpointTableBuilder};
pub use types::ModelKind;
