//! Version catalog layer
//!
//! This module fetches the legacy Mojang bucket listings and the nostalgia
//! feed, classifies every version found there and keeps the result in an
//! owned, indexable catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│   Builder   │────▶│   Catalog   │
//! │   (HTTP)    │     │ (classify)  │     │  (lookup)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                        │       │               │
//!                        ▼       ▼               ▼
//!               ┌──────────┐ ┌──────────┐ ┌─────────────┐
//!               │  Bucket  │ │Nostalgia │ │    Store    │
//!               │  (XML)   │ │  (JSON)  │ │ (snapshot)  │
//!               └──────────┘ └──────────┘ └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`alias`]: Nostalgia name to release name translation table
//! - [`bucket`]: S3 bucket listing parser
//! - [`builder`]: Fetch, classify and sort pipeline
//! - [`classify`]: Classification rules and name patterns
//! - [`error`]: Error types for catalog and snapshot operations
//! - [`fetcher`]: Fetcher trait and HTTP implementation
//! - [`list`]: The catalog itself
//! - [`nostalgia`]: Nostalgia feed parser
//! - [`store`]: JSON snapshot of a loaded catalog
//! - [`time`]: S3 timestamp parsing
//! - [`types`]: `VersionEntry` and `VersionKind`

pub mod alias;
pub mod bucket;
pub mod builder;
pub mod classify;
pub mod error;
pub mod fetcher;
pub mod list;
pub mod nostalgia;
pub mod store;
pub mod time;
pub mod types;

pub use builder::VersionCatalogBuilder;
pub use list::VersionCatalog;
pub use types::{VersionEntry, VersionKind};
