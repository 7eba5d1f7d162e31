use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, classify};

/// Dot-segmented name of a template field, e.g. `resultados.cliente.nombre`.
///
/// Always trimmed and never empty. Names classified as `Unique` or `Plural`
/// also carry something after their category prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Builds a field name from the raw `name` attribute of a definition.
    ///
    /// Returns `None` for names that load must discard: blank names, and
    /// prefixed names with nothing after the prefix (`resultados.`).
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }
        if classify(name) != Category::General
            && name
                .split_once('.')
                .is_none_or(|(_, rest)| rest.trim().is_empty())
        {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn category(&self) -> Category {
        classify(&self.0)
    }

    /// Every path segment after the first, still joined by dots.
    pub fn tail(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, rest)| rest)
    }

    /// Case-insensitive substring test; `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.0.to_lowercase().contains(needle)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
