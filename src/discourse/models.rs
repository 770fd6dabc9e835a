use serde::Deserialize;

/// Response from the `search.json` endpoint.
///
/// Discourse leaves out `topics` and `posts` when a search has no hits.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub topics: Vec<SearchTopic>,
    #[serde(default)]
    pub posts: Vec<SearchPost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTopic {
    pub id: u64,
    pub fancy_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPost {
    pub topic_id: u64,
    pub post_number: u64,
    #[serde(default)]
    pub name: Option<String>,
    pub username: String,
    pub blurb: String,
    pub created_at: String,
}

impl SearchPost {
    /// Display name when the author set one, else the account handle.
    #[must_use]
    pub fn author(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.username.as_str())
    }
}
