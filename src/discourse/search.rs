use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::constants::USER_AGENT;
use crate::discourse::{SearchError, SearchResponse, SearchTopic};
use crate::record::PostRecord;

/// Build the search endpoint URL for a query.
#[must_use]
pub fn search_url(base_url: &str, query: &str) -> String {
    format!("{base_url}/search.json?q={}", urlencoding::encode(query))
}

/// Run one search against the forum and return its posts as records.
///
/// The HTTP status is not checked: a non-2xx response is judged by its body
/// like any other.
///
/// # Errors
///
/// Returns an error if the request fails, the body is not JSON, or any post
/// cannot be mapped to a record.
pub async fn fetch_records(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Result<Vec<PostRecord>, SearchError> {
    let url = search_url(base_url, query);
    info!(url = %url, "Searching forum");

    let response = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        warn!(%status, "Search returned non-success status");
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), "Search response received");

    let records = parse_records(base_url, &body)?;
    info!(records = records.len(), "Mapped search results");
    Ok(records)
}

/// Map a raw `search.json` body to records, in the order of its `posts`.
///
/// # Errors
///
/// Returns [`SearchError::SearchFailure`] if the body is not JSON,
/// [`SearchError::UnexpectedShape`] if a required key is absent,
/// [`SearchError::MissingTopic`] if a post points at an unknown topic, and
/// [`SearchError::Timestamp`] for a malformed `created_at`.
pub fn parse_records(base_url: &str, body: &str) -> Result<Vec<PostRecord>, SearchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|source| SearchError::SearchFailure {
            body: body.to_string(),
            source,
        })?;
    let response: SearchResponse =
        serde_json::from_value(value).map_err(SearchError::UnexpectedShape)?;

    let topics: HashMap<u64, &SearchTopic> = response
        .topics
        .iter()
        .map(|topic| (topic.id, topic))
        .collect();

    response
        .posts
        .iter()
        .map(|post| -> Result<PostRecord, SearchError> {
            let topic = topics
                .get(&post.topic_id)
                .ok_or(SearchError::MissingTopic {
                    topic_id: post.topic_id,
                    post_number: post.post_number,
                })?;
            Ok(PostRecord::from_search_post(base_url, topic, post)?)
        })
        .collect()
}
