//! Discourse search API client.
//!
//! Issues a single `search.json` request against a forum and flattens the
//! matched posts into [`PostRecord`](crate::record::PostRecord)s.

mod error;
mod models;
mod search;

pub use error::SearchError;
pub use models::{SearchPost, SearchResponse, SearchTopic};
pub use search::{fetch_records, parse_records, search_url};
