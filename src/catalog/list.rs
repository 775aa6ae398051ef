//! In-memory version catalog

use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::types::{VersionEntry, VersionKind};

/// Identifier that never resolves to a catalog entry
pub const UNKNOWN_VERSION: &str = "unknown";

/// Result of a successful main catalog load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainCatalog {
    /// Entries sorted by timestamp, newest first
    pub entries: Vec<VersionEntry>,
    /// Position of the first `CurrentStable` entry
    pub stable_index: Option<usize>,
}

/// Combined catalog of Mojang releases and nostalgia versions.
///
/// Indexing addresses the main entries first and the legacy entries after
/// them, so index `main().len()` is the first legacy entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionCatalog {
    main: Vec<VersionEntry>,
    legacy: Vec<VersionEntry>,
    stable_index: Option<usize>,
    main_loaded: bool,
    legacy_loaded: bool,
}

impl VersionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_main_load(&self) -> bool {
        !self.main_loaded
    }

    pub fn needs_legacy_load(&self) -> bool {
        !self.legacy_loaded
    }

    /// Install a freshly loaded main part.
    ///
    /// Legacy entries whose identifier is now listed in main are dropped, since
    /// the legacy part may have been built while main was still missing.
    pub fn set_main(&mut self, main: MainCatalog) {
        self.main = main.entries;
        self.stable_index = main.stable_index;
        self.main_loaded = true;

        let main = &self.main;
        let before = self.legacy.len();
        self.legacy.retain(|entry| {
            entry.identifier() == UNKNOWN_VERSION
                || !main.iter().any(|known| known.identifier() == entry.identifier())
        });
        if self.legacy.len() != before {
            debug!(
                "Dropped {} legacy versions now listed in main",
                before - self.legacy.len()
            );
        }
    }

    pub fn set_legacy(&mut self, legacy: Vec<VersionEntry>) {
        self.legacy = legacy;
        self.legacy_loaded = true;
    }

    pub fn main(&self) -> &[VersionEntry] {
        &self.main
    }

    pub fn legacy(&self) -> &[VersionEntry] {
        &self.legacy
    }

    pub fn len(&self) -> usize {
        self.main.len() + self.legacy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&VersionEntry> {
        if index < self.main.len() {
            self.main.get(index)
        } else {
            self.legacy.get(index - self.main.len())
        }
    }

    /// All entries in combined order
    pub fn iter(&self) -> impl Iterator<Item = &VersionEntry> {
        self.main.iter().chain(self.legacy.iter())
    }

    pub fn entries_of_kind(&self, kind: VersionKind) -> impl Iterator<Item = &VersionEntry> {
        self.iter().filter(move |entry| entry.kind() == kind)
    }

    /// Look an entry up by identifier, searching main entries before legacy ones
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&VersionEntry> {
        if identifier == UNKNOWN_VERSION {
            return None;
        }
        self.iter().find(|entry| entry.identifier() == identifier)
    }

    pub fn current_stable(&self) -> Option<&VersionEntry> {
        self.stable_index.and_then(|index| self.main.get(index))
    }

    pub fn stable_index(&self) -> Option<usize> {
        self.stable_index
    }
}

impl Index<usize> for VersionCatalog {
    type Output = VersionEntry;

    fn index(&self, index: usize) -> &Self::Output {
        if index < self.main.len() {
            &self.main[index]
        } else {
            &self.legacy[index - self.main.len()]
        }
    }
}
