use chrono::NaiveDateTime;

use crate::catalog::error::CatalogError;

/// Format of `LastModified` values in S3 bucket listings
const S3_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parse an S3 `LastModified` timestamp (`2012-12-20T15:31:09.000Z`) into
/// seconds since UNIX epoch.
///
/// The trailing `Z` means UTC, so the value is interpreted as UTC and never
/// as local time. Milliseconds are truncated.
pub fn parse_s3_timestamp(value: &str) -> Result<i64, CatalogError> {
    NaiveDateTime::parse_from_str(value, S3_TIME_FORMAT)
        .map(|dt| dt.and_utc().timestamp())
        .map_err(|e| CatalogError::TimeParse(format!("{:?}: {}", value, e)))
}
