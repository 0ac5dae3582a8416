use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("catalog load failed: {0}")]
    CatalogLoad(Cause),
    #[error("record load failed: {0}")]
    RecordLoad(Cause),
    #[error("sprite load failed: {0}")]
    SpriteLoad(Cause),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum Cause {
    #[error("request failed: {0}")]
    RequestFailed(Arc<reqwest::Error>),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Malformed(Arc<serde_json::Error>),
    #[error("catalog is empty")]
    Empty,
}

impl From<reqwest::Error> for Cause {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(Arc::new(error))
    }
}

impl From<serde_json::Error> for Cause {
    fn from(error: serde_json::Error) -> Self {
        Self::Malformed(Arc::new(error))
    }
}
