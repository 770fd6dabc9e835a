use thiserror::Error;

use crate::record::TimestampError;

/// Ways a search fetch can fail. Any of them aborts the whole run.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The body was not JSON at all. Carries the body so the caller can see
    /// what the server returned instead.
    #[error("failed to parse: {body}")]
    SearchFailure {
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected search response shape: {0}")]
    UnexpectedShape(#[source] serde_json::Error),
    #[error("post {post_number} references topic {topic_id}, which is missing from the response")]
    MissingTopic { topic_id: u64, post_number: u64 },
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}
