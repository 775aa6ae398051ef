use thiserror::Error;

/// Coarse failure categories reported to callers of the catalog builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    TimeParse,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Failed to parse timestamp: {0}")]
    TimeParse(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Network(_) | CatalogError::UnexpectedStatus { .. } => ErrorKind::Network,
            CatalogError::Parse(_) => ErrorKind::Parse,
            CatalogError::TimeParse(_) => ErrorKind::TimeParse,
        }
    }
}

impl From<quick_xml::DeError> for CatalogError {
    fn from(e: quick_xml::DeError) -> Self {
        CatalogError::Parse(format!("bucket listing: {}", e))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(format!("nostalgia feed: {}", e))
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
