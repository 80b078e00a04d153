//! Common types used throughout the IGDB client
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Ordered query parameters, sent in insertion order
pub type QueryParams = Vec<(String, String)>;

// ============================================================================
// Field Selector
// ============================================================================

/// Field selection string forwarded verbatim as the `fields` query parameter
///
/// The client never parses or validates the contents. The default selects
/// every field (`*`); expanded selectors such as `*,genres.*` are passed
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSelector(String);

impl FieldSelector {
    /// Selector matching every field
    pub const ALL: &'static str = "*";

    /// Create a selector from any string
    pub fn new(fields: impl Into<String>) -> Self {
        Self(fields.into())
    }

    /// Selector for all fields (`*`)
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Get the raw selector string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldSelector {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldSelector {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FieldSelector {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&FieldSelector> for FieldSelector {
    fn from(value: &FieldSelector) -> Self {
        value.clone()
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
