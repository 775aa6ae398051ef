//! Nostalgia feed parser

use serde::Deserialize;

use crate::catalog::error::CatalogError;

/// Version list published by the nostalgia feed, oldest first
#[derive(Debug, Deserialize)]
pub struct NostalgiaFeed {
    pub order: Vec<String>,
}

impl NostalgiaFeed {
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let feed: NostalgiaFeed = serde_json::from_str(json)?;
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::ErrorKind;

    #[test]
    fn parse_reads_order_and_ignores_other_fields() {
        let feed = NostalgiaFeed::parse(
            r#"{
                "order": ["c0.0.11a", "a1.0.4", "1.2_pre"],
                "versions": {"a1.0.4": {"url": "ignored"}}
            }"#,
        )
        .unwrap();

        assert_eq!(feed.order, vec!["c0.0.11a", "a1.0.4", "1.2_pre"]);
    }

    #[test]
    fn parse_fails_without_order() {
        let err = NostalgiaFeed::parse(r#"{"versions": {}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn parse_fails_on_truncated_document() {
        let err = NostalgiaFeed::parse(r#"{"order": ["a1.0.4""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
