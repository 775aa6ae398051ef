//! Classification rules for bucket listing entries
//!
//! Each release artifact found in the assets listing is tagged by comparing
//! it against the stable marker taken from the stable listing:
//!
//! | condition                                    | kind            |
//! |----------------------------------------------|-----------------|
//! | ETag equals the marker's ETag                | `CurrentStable` |
//! | newer than the marker                        | `Snapshot`      |
//! | older than the marker, snapshot-like name    | `OldSnapshot`   |
//! | older than the marker                        | `Stable`        |
//! | same timestamp, different ETag               | `CurrentStable` |
//!
//! Without a marker, snapshot-like names are `Snapshot` and the rest `Stable`.

use regex::Regex;

use crate::catalog::types::{VersionEntry, VersionKind};

/// Object key of the stable marker in the stable listing
pub const STABLE_MARKER_KEY: &str = "minecraft.jar";

/// Suffix of release artifacts in the assets listing
const ARTIFACT_SUFFIX: &str = "/minecraft.jar";

pub struct Classifier {
    /// Regex for release artifact keys: `1_4_7/minecraft.jar`
    artifact_re: Regex,
    /// Regex for snapshot-like names: `12w34a`, `1.4.6-pre`, `1.5-rc1`
    snapshot_re: Regex,
    /// Regex for in-development nostalgia names: `indev`, `infdev`
    in_development_re: Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            artifact_re: Regex::new(r"/minecraft\.jar$").unwrap(),
            snapshot_re: Regex::new(r"[0-9][0-9]w[0-9][0-9][a-z]|pre|rc").unwrap(),
            in_development_re: Regex::new(r"in(f)?dev").unwrap(),
        }
    }

    /// Returns the key with the artifact suffix stripped, or None if the key
    /// is not a release artifact.
    pub fn artifact_name<'a>(&self, key: &'a str) -> Option<&'a str> {
        if self.artifact_re.is_match(key) {
            Some(&key[..key.len() - ARTIFACT_SUFFIX.len()])
        } else {
            None
        }
    }

    pub fn is_snapshot_name(&self, identifier: &str) -> bool {
        self.snapshot_re.is_match(identifier)
    }

    pub fn is_in_development(&self, legacy_id: &str) -> bool {
        self.in_development_re.is_match(legacy_id)
    }

    /// Decide the kind of an assets listing entry.
    pub fn classify(
        &self,
        identifier: &str,
        etag: &str,
        timestamp: i64,
        marker: Option<&VersionEntry>,
    ) -> VersionKind {
        let Some(marker) = marker else {
            return if self.is_snapshot_name(identifier) {
                VersionKind::Snapshot
            } else {
                VersionKind::Stable
            };
        };

        if etag == marker.etag() {
            VersionKind::CurrentStable
        } else if timestamp > marker.timestamp() {
            VersionKind::Snapshot
        } else if timestamp < marker.timestamp() && self.is_snapshot_name(identifier) {
            VersionKind::OldSnapshot
        } else if timestamp < marker.timestamp() {
            VersionKind::Stable
        } else {
            // Same upload time as the marker but a different checksum
            VersionKind::CurrentStable
        }
    }
}

/// Turn a raw artifact name (`1_4_7`) into the catalog identifier (`1.4.7`)
pub fn normalize_name(raw: &str) -> String {
    raw.replace('_', ".")
}
