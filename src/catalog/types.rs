//! Common types for the version catalog

use serde::{Deserialize, Serialize};

/// Classification of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionKind {
    /// The release Mojang currently ships as stable
    CurrentStable,
    /// A release older than the current stable one
    Stable,
    /// Anything published after the current stable release
    Snapshot,
    /// A snapshot or pre-release older than the current stable release
    OldSnapshot,
    /// Entry taken from the nostalgia feed
    LegacyAlias,
}

impl VersionKind {
    /// Returns the string representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionKind::CurrentStable => "current_stable",
            VersionKind::Stable => "stable",
            VersionKind::Snapshot => "snapshot",
            VersionKind::OldSnapshot => "old_snapshot",
            VersionKind::LegacyAlias => "legacy_alias",
        }
    }
}

impl std::str::FromStr for VersionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current_stable" => Ok(VersionKind::CurrentStable),
            "stable" => Ok(VersionKind::Stable),
            "snapshot" => Ok(VersionKind::Snapshot),
            "old_snapshot" => Ok(VersionKind::OldSnapshot),
            "legacy_alias" => Ok(VersionKind::LegacyAlias),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for VersionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single game version known to the catalog.
///
/// Entries are immutable once built. Two entries are equal when their
/// identifiers are equal, regardless of the remaining metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    identifier: String,
    display_name: String,
    /// Seconds since UNIX epoch (UTC)
    timestamp: i64,
    download_url: String,
    etag: String,
    kind: VersionKind,
    is_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    legacy_id: Option<String>,
}

impl VersionEntry {
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        timestamp: i64,
        download_url: impl Into<String>,
        etag: impl Into<String>,
        kind: VersionKind,
        is_current: bool,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            timestamp,
            download_url: download_url.into(),
            etag: etag.into(),
            kind,
            is_current,
            legacy_id: None,
        }
    }

    /// Build an entry for a nostalgia feed version.
    ///
    /// `raw_id` is the name the feed uses, `canonical_id` the name it maps to.
    pub fn legacy(raw_id: &str, canonical_id: &str, download_url: impl Into<String>) -> Self {
        Self {
            identifier: canonical_id.to_string(),
            display_name: canonical_id.to_string(),
            timestamp: 0,
            download_url: download_url.into(),
            etag: String::new(),
            kind: VersionKind::LegacyAlias,
            is_current: false,
            legacy_id: Some(raw_id.to_string()),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    pub fn etag(&self) -> &str {
        &self.etag
    }

    pub fn kind(&self) -> VersionKind {
        self.kind
    }

    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Raw nostalgia feed name this entry was created from, if any
    pub fn legacy_id(&self) -> Option<&str> {
        self.legacy_id.as_deref()
    }
}

impl PartialEq for VersionEntry {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for VersionEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(VersionKind::CurrentStable)]
    #[case(VersionKind::Stable)]
    #[case(VersionKind::Snapshot)]
    #[case(VersionKind::OldSnapshot)]
    #[case(VersionKind::LegacyAlias)]
    fn version_kind_parses_its_own_string_form(#[case] kind: VersionKind) {
        assert_eq!(kind.as_str().parse::<VersionKind>(), Ok(kind));
    }

    #[test]
    fn version_kind_rejects_unknown_string() {
        assert!("release".parse::<VersionKind>().is_err());
    }

    #[test]
    fn entries_with_same_identifier_are_equal() {
        let a = VersionEntry::new("1.4.7", "1.4.7", 10, "a", "x", VersionKind::Stable, false);
        let b = VersionEntry::new("1.4.7", "other", 20, "b", "y", VersionKind::Snapshot, true);

        assert_eq!(a, b);
    }

    #[test]
    fn legacy_entry_uses_canonical_id_and_keeps_raw_id() {
        let entry = VersionEntry::legacy("1.4.3_pre", "1.4.3", "http://feed");

        assert_eq!(entry.identifier(), "1.4.3");
        assert_eq!(entry.display_name(), "1.4.3");
        assert_eq!(entry.legacy_id(), Some("1.4.3_pre"));
        assert_eq!(entry.kind(), VersionKind::LegacyAlias);
        assert!(!entry.is_current());
    }
}
