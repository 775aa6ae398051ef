//! Fetch, classify and sort pipeline that fills a [`VersionCatalog`]

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::catalog::alias::{Alias, LegacyAliasTable};
use crate::catalog::bucket::BucketListing;
use crate::catalog::classify::{Classifier, STABLE_MARKER_KEY, normalize_name};
use crate::catalog::error::CatalogError;
use crate::catalog::fetcher::{Fetcher, HttpFetcher};
use crate::catalog::list::{MainCatalog, UNKNOWN_VERSION, VersionCatalog};
use crate::catalog::nostalgia::NostalgiaFeed;
use crate::catalog::time::parse_s3_timestamp;
use crate::catalog::types::{VersionEntry, VersionKind};
use crate::config::{CatalogConfig, EndpointsConfig};

/// Identifier given to the stable marker when it has to be added on its own
const STABLE_MARKER_ID: &str = "LatestStable";
const STABLE_MARKER_NAME: &str = "Current";

/// Builds catalog parts from the remote listings.
///
/// Every load issues its requests sequentially and exactly once; nothing is
/// retried.
pub struct VersionCatalogBuilder {
    fetcher: Arc<dyn Fetcher>,
    endpoints: EndpointsConfig,
    aliases: LegacyAliasTable,
    classifier: Classifier,
}

impl VersionCatalogBuilder {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        endpoints: EndpointsConfig,
        aliases: LegacyAliasTable,
    ) -> Self {
        Self {
            fetcher,
            endpoints,
            aliases,
            classifier: Classifier::new(),
        }
    }

    /// Build a builder that fetches over HTTP as configured
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::new(
            Arc::new(fetcher),
            config.endpoints.clone(),
            config.aliases.clone(),
        ))
    }

    /// Load Mojang releases from the stable and assets listings.
    ///
    /// # Returns
    /// * `Ok(MainCatalog)` - Entries ordered from newest to oldest
    /// * `Err(CatalogError)` - If either fetch fails or a listing is malformed
    pub async fn load_main_catalog(&self) -> Result<MainCatalog, CatalogError> {
        let marker = self.fetch_stable_marker().await?;
        match &marker {
            Some(marker) => debug!("Stable marker found with ETag {}", marker.etag()),
            None => warn!("No stable marker in {}", self.endpoints.stable_listing),
        }

        let xml = self
            .fetcher
            .fetch_text(&self.endpoints.assets_listing)
            .await?;
        let listing = BucketListing::parse(&xml)?;

        let mut entries = Vec::new();
        let mut marker_matched = false;

        for object in &listing.contents {
            let key = object.key()?;
            let etag = object.etag()?;
            let timestamp = parse_s3_timestamp(object.last_modified()?)?;

            let Some(raw_name) = self.classifier.artifact_name(key) else {
                continue;
            };
            let identifier = normalize_name(raw_name);
            let kind = self
                .classifier
                .classify(&identifier, etag, timestamp, marker.as_ref());

            let entry = match &marker {
                Some(marker) if marker.etag() == etag => {
                    marker_matched = true;
                    VersionEntry::new(
                        &identifier,
                        &identifier,
                        timestamp,
                        marker.download_url(),
                        etag,
                        kind,
                        true,
                    )
                }
                _ => VersionEntry::new(
                    &identifier,
                    &identifier,
                    timestamp,
                    format!("{}{}/", self.endpoints.assets_listing, raw_name),
                    etag,
                    kind,
                    false,
                ),
            };
            entries.push(entry);
        }

        if let Some(marker) = marker {
            if !marker_matched {
                info!("Stable marker not found among assets, adding it separately");
                entries.push(marker);
            }
        }

        entries.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        let stable_index = entries
            .iter()
            .position(|entry| entry.kind() == VersionKind::CurrentStable);

        info!("Loaded {} main versions", entries.len());
        Ok(MainCatalog {
            entries,
            stable_index,
        })
    }

    /// Look for `minecraft.jar` in the stable listing
    async fn fetch_stable_marker(&self) -> Result<Option<VersionEntry>, CatalogError> {
        let xml = self
            .fetcher
            .fetch_text(&self.endpoints.stable_listing)
            .await?;
        let listing = BucketListing::parse(&xml)?;

        for object in &listing.contents {
            if object.key()? != STABLE_MARKER_KEY {
                continue;
            }
            let timestamp = parse_s3_timestamp(object.last_modified()?)?;
            return Ok(Some(VersionEntry::new(
                STABLE_MARKER_ID,
                STABLE_MARKER_NAME,
                timestamp,
                self.endpoints.stable_listing.as_str(),
                object.etag()?,
                VersionKind::CurrentStable,
                true,
            )));
        }

        Ok(None)
    }

    /// Load nostalgia versions that are not already part of `main`.
    ///
    /// The returned entries are in reverse feed order.
    pub async fn load_legacy_catalog(
        &self,
        main: &[VersionEntry],
    ) -> Result<Vec<VersionEntry>, CatalogError> {
        let json = self
            .fetcher
            .fetch_text(&self.endpoints.nostalgia_feed)
            .await?;
        let feed = NostalgiaFeed::parse(&json)?;

        let mut legacy: Vec<VersionEntry> = Vec::new();
        for raw_id in &feed.order {
            if self.classifier.is_in_development(raw_id) {
                debug!("Skipping in-development version {}", raw_id);
                continue;
            }
            let canonical = match self.aliases.resolve(raw_id) {
                Alias::Canonical(canonical) => canonical,
                Alias::Ignore => {
                    debug!("Ignoring legacy version {}", raw_id);
                    continue;
                }
            };
            if is_known(canonical, main, &legacy) {
                debug!("Legacy version {} already listed", canonical);
                continue;
            }
            legacy.push(VersionEntry::legacy(
                raw_id,
                canonical,
                self.endpoints.nostalgia_feed.as_str(),
            ));
        }
        legacy.reverse();

        info!("Loaded {} legacy versions", legacy.len());
        Ok(legacy)
    }

    /// Load whichever parts of `catalog` have not been loaded yet.
    ///
    /// Both parts are attempted even if the first fails; the first error is
    /// returned.
    pub async fn ensure_loaded(&self, catalog: &mut VersionCatalog) -> Result<(), CatalogError> {
        let mut first_error = None;

        if catalog.needs_main_load() {
            match self.load_main_catalog().await {
                Ok(main) => catalog.set_main(main),
                Err(e) => {
                    error!("Failed to load main versions: {}", e);
                    first_error = Some(e);
                }
            }
        }

        if catalog.needs_legacy_load() {
            match self.load_legacy_catalog(catalog.main()).await {
                Ok(legacy) => catalog.set_legacy(legacy),
                Err(e) => {
                    error!("Failed to load legacy versions: {}", e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Reload both parts of `catalog`, keeping the previous contents of any
    /// part whose reload fails.
    pub async fn reload(&self, catalog: &mut VersionCatalog) -> Result<(), CatalogError> {
        let mut first_error = None;

        match self.load_main_catalog().await {
            Ok(main) => catalog.set_main(main),
            Err(e) => {
                warn!("Keeping previous main versions: {}", e);
                first_error = Some(e);
            }
        }

        match self.load_legacy_catalog(catalog.main()).await {
            Ok(legacy) => catalog.set_legacy(legacy),
            Err(e) => {
                warn!("Keeping previous legacy versions: {}", e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

fn is_known(identifier: &str, main: &[VersionEntry], legacy: &[VersionEntry]) -> bool {
    identifier != UNKNOWN_VERSION
        && main
            .iter()
            .chain(legacy.iter())
            .any(|entry| entry.identifier() == identifier)
}
