//! Kind → path lookup table

use super::types::ModelKind;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use tracing::error;

/// Read-only mapping from model kind to endpoint path
///
/// Built once (usually via [`EndpointTable::igdb_v3`]) and owned by the
/// client. A kind missing from the table is a caller bug and resolves to
/// [`Error::UnsupportedKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    paths: BTreeMap<ModelKind, String>,
}

impl EndpointTable {
    /// The IGDB v3 endpoint table covering every [`ModelKind`]
    ///
    /// See <https://api-docs.igdb.com/#endpoints>
    pub fn igdb_v3() -> Self {
        let paths = ModelKind::ALL
            .into_iter()
            .map(|kind| (kind, kind.default_path().to_string()))
            .collect();
        Self { paths }
    }

    /// Start building a custom table
    pub fn builder() -> EndpointTableBuilder {
        EndpointTableBuilder::default()
    }

    /// Resolve the endpoint path for a kind
    pub fn resolve(&self, kind: ModelKind) -> Result<&str> {
        match self.paths.get(&kind) {
            Some(path) => Ok(path.as_str()),
            None => {
                error!("Endpoint lookup for unsupported kind: {kind}");
                Err(Error::UnsupportedKind { kind })
            }
        }
    }

    /// Check whether a kind has an endpoint
    pub fn supports(&self, kind: ModelKind) -> bool {
        self.paths.contains_key(&kind)
    }

    /// Iterate over all entries in kind order
    pub fn iter(&self) -> impl Iterator<Item = (ModelKind, &str)> {
        self.paths.iter().map(|(kind, path)| (*kind, path.as_str()))
    }

    /// Number of kinds in the table
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for EndpointTable {
    fn default() -> Self {
        Self::igdb_v3()
    }
}

/// Builder for a custom [`EndpointTable`]
#[derive(Debug, Default)]
pub struct EndpointTableBuilder {
    paths: BTreeMap<ModelKind, String>,
}

impl EndpointTableBuilder {
    /// Map a kind to its IGDB v3 path
    #[must_use]
    pub fn kind(mut self, kind: ModelKind) -> Self {
        self.paths.insert(kind, kind.default_path().to_string());
        self
    }

    /// Map a kind to an explicit path
    #[must_use]
    pub fn path(mut self, kind: ModelKind, path: impl Into<String>) -> Self {
        self.paths.insert(kind, path.into());
        self
    }

    /// Build the table, rejecting empty paths
    pub fn build(self) -> Result<EndpointTable> {
        if let Some((kind, _)) = self.paths.iter().find(|(_, p)| p.trim().is_empty()) {
            return Err(Error::invalid_value(
                "endpoints",
                format!("empty path for kind {kind}"),
            ));
        }
        Ok(EndpointTable { paths: self.paths })
    }
}
