//! Translation table for nostalgia feed version names

use indexmap::IndexMap;
use serde::Deserialize;

/// Result of looking a legacy identifier up in the alias table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alias<'a> {
    /// Use this identifier for the catalog entry
    Canonical(&'a str),
    /// Drop the legacy identifier entirely
    Ignore,
}

/// Read-only mapping from nostalgia identifiers to canonical release identifiers.
///
/// Deserializes from a JSON object where a `null` value marks an identifier
/// that should be ignored:
///
/// ```json
/// { "1.4.5_pre": null, "1.4.3_pre": "1.4.3" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LegacyAliasTable {
    mapping: IndexMap<String, Option<String>>,
}

impl Default for LegacyAliasTable {
    fn default() -> Self {
        Self::from_pairs([
            ("1.4.5_pre", None),
            ("1.4.3_pre", Some("1.4.3")),
            ("1.4.2_pre", None),
            ("1.4.1_pre", Some("1.4.1")),
            ("1.4_pre", Some("1.4")),
            ("1.3.2_pre", None),
            ("1.3.1_pre", None),
            ("1.3_pre", None),
            ("1.2_pre", Some("1.2")),
        ])
    }
}

impl LegacyAliasTable {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> Self {
        Self {
            mapping: pairs
                .into_iter()
                .map(|(from, to)| (from.to_string(), to.map(str::to_string)))
                .collect(),
        }
    }

    /// Resolve a legacy identifier. Identifiers missing from the table map to themselves.
    pub fn resolve<'a>(&'a self, legacy_id: &'a str) -> Alias<'a> {
        match self.mapping.get(legacy_id) {
            Some(Some(canonical)) if !canonical.is_empty() => Alias::Canonical(canonical.as_str()),
            Some(_) => Alias::Ignore,
            None => Alias::Canonical(legacy_id),
        }
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
