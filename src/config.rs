use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::alias::LegacyAliasTable;

// =============================================================================
// Fetch-related constants
// =============================================================================

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every request
pub const USER_AGENT: &str = "mc-version-catalog";

/// Bucket listing that holds the stable `minecraft.jar` marker
pub const DEFAULT_STABLE_LISTING_URL: &str = "http://s3.amazonaws.com/MinecraftDownload/";

/// Bucket listing with every historical release artifact
pub const DEFAULT_ASSETS_LISTING_URL: &str = "http://assets.minecraft.net/";

/// Nostalgia feed listing legacy versions
pub const DEFAULT_NOSTALGIA_FEED_URL: &str = "http://sonicrules.org/mcnweb.py?pversion=1&list=True";

/// Catalog configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub endpoints: EndpointsConfig,
    pub fetch: FetchConfig,
    pub aliases: LegacyAliasTable,
}

/// Remote document locations
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointsConfig {
    /// Listing searched for the stable marker; also its download URL
    pub stable_listing: String,
    /// Listing of release artifacts; artifact download URLs are built under it
    pub assets_listing: String,
    pub nostalgia_feed: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            stable_listing: DEFAULT_STABLE_LISTING_URL.to_string(),
            assets_listing: DEFAULT_ASSETS_LISTING_URL.to_string(),
            nostalgia_feed: DEFAULT_NOSTALGIA_FEED_URL.to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchConfig {
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl CatalogConfig {
    /// Read configuration from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Directory holding the configuration, catalog snapshot and log file:
/// `$XDG_DATA_HOME/mc-version-catalog`, else under `~/.local/share`, else `.`
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Last successfully loaded catalog, read by `--offline`
pub fn snapshot_path() -> PathBuf {
    data_dir().join("catalog.json")
}

pub fn log_path() -> PathBuf {
    data_dir().join("mc-version-catalog.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("mc-version-catalog")
}
