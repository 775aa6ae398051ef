//! S3 bucket listing (`ListBucketResult`) parser

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::catalog::error::CatalogError;

/// Minimal bucket listing model – only the objects and the fields we read.
#[derive(Debug, Deserialize, Default)]
pub struct BucketListing {
    #[serde(default, rename = "Contents")]
    pub contents: Vec<BucketObject>,
}

/// One stored object in a bucket listing
#[derive(Debug, Deserialize, Default, Clone)]
pub struct BucketObject {
    #[serde(default, rename = "Key")]
    key: Option<String>,
    #[serde(default, rename = "LastModified")]
    last_modified: Option<String>,
    #[serde(default, rename = "ETag")]
    etag: Option<String>,
}

impl BucketListing {
    /// Parse a `ListBucketResult` XML document.
    pub fn parse(xml: &str) -> Result<Self, CatalogError> {
        let listing: BucketListing = from_str(xml)?;
        Ok(listing)
    }
}

impl BucketObject {
    pub fn key(&self) -> Result<&str, CatalogError> {
        required(&self.key, "Key")
    }

    pub fn last_modified(&self) -> Result<&str, CatalogError> {
        required(&self.last_modified, "LastModified")
    }

    /// ETag exactly as listed, including the quotes S3 wraps it in
    pub fn etag(&self) -> Result<&str, CatalogError> {
        required(&self.etag, "ETag")
    }
}

fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str, CatalogError> {
    field
        .as_deref()
        .ok_or_else(|| CatalogError::Parse(format!("bucket object is missing <{}>", name)))
}
