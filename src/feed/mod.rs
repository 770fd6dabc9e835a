//! Atom feed construction from post records.

mod atom;

use chrono::{DateTime, FixedOffset};

use crate::record::PostRecord;

/// Atom feed document, one entry per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomFeed {
    pub id: String,
    pub title: String,
    /// Latest entry timestamp; `None` when the feed has no entries.
    pub updated: Option<DateTime<FixedOffset>>,
    pub entries: Vec<AtomEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomEntry {
    pub id: String,
    pub title: String,
    pub link: String,
    pub content: String,
    pub updated: DateTime<FixedOffset>,
}

impl From<&PostRecord> for AtomEntry {
    fn from(record: &PostRecord) -> Self {
        Self {
            id: record.url.clone(),
            title: record.title.clone(),
            link: record.url.clone(),
            content: record.snippet.clone(),
            updated: record.timestamp,
        }
    }
}

impl AtomFeed {
    /// Build a feed identified by `feed_id`, keeping record order.
    #[must_use]
    pub fn from_records(records: &[PostRecord], feed_id: &str, feed_title: &str) -> Self {
        Self {
            id: feed_id.to_string(),
            title: feed_title.to_string(),
            updated: latest_updated(records),
            entries: records.iter().map(AtomEntry::from).collect(),
        }
    }

    /// Serialize as an indented Atom 1.0 document.
    ///
    /// # Errors
    ///
    /// Only fails if the underlying XML writer does, which an in-memory
    /// buffer does not.
    pub fn render(&self) -> quick_xml::Result<Vec<u8>> {
        atom::write_feed(self)
    }
}

/// Most recent record timestamp. On ties the earliest record wins.
#[must_use]
pub fn latest_updated(records: &[PostRecord]) -> Option<DateTime<FixedOffset>> {
    records
        .iter()
        .map(|record| record.timestamp)
        .reduce(|latest, ts| if ts > latest { ts } else { latest })
}

/// Render records straight to Atom bytes.
///
/// # Errors
///
/// See [`AtomFeed::render`].
pub fn render(records: &[PostRecord], feed_id: &str, feed_title: &str) -> quick_xml::Result<Vec<u8>> {
    AtomFeed::from_records(records, feed_id, feed_title).render()
}
