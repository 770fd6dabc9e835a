//! Post records: the flat form of a search hit that the feed is built from.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

use crate::discourse::{SearchPost, SearchTopic};

/// Layout of a Discourse `created_at` value, e.g. `2024-01-02T03:04:05.123456+00:00`.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Byte offset of the `.` that starts the fractional seconds.
const FRACTION_OFFSET: usize = 19;

/// Fractional seconds carry at most microsecond precision.
const MAX_FRACTION_DIGITS: usize = 6;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("timestamp '{0}' has no fractional seconds")]
    MissingFraction(String),
    #[error("timestamp '{0}' must have 1 to 6 fractional second digits")]
    FractionDigits(String),
    #[error("timestamp '{value}' is not a valid post timestamp: {source}")]
    Format {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// One matched post, ready to become a feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// `<topic title> [<post number>]`
    pub title: String,
    /// Deep link `<base url>/t/<topic id>/<post number>`, unique per fetch.
    pub url: String,
    /// `<author>: <blurb>`
    pub snippet: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl PostRecord {
    /// Derive a record from a search hit and the topic it belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the post's `created_at` is not in the strict
    /// Discourse timestamp layout.
    pub fn from_search_post(
        base_url: &str,
        topic: &SearchTopic,
        post: &SearchPost,
    ) -> Result<Self, TimestampError> {
        Ok(Self {
            title: format!("{} [{}]", topic.fancy_title, post.post_number),
            url: post_url(base_url, post.topic_id, post.post_number),
            snippet: format!("{}: {}", post.author(), post.blurb),
            timestamp: parse_created_at(&post.created_at)?,
        })
    }
}

/// Build the permalink of a post within its topic.
#[must_use]
pub fn post_url(base_url: &str, topic_id: u64, post_number: u64) -> String {
    format!("{base_url}/t/{topic_id}/{post_number}")
}

/// Parse a post creation timestamp.
///
/// Fractional seconds and a UTC offset are mandatory; a trailing `Z` counts
/// as `+00:00`.
///
/// # Errors
///
/// Returns an error if the value deviates from the expected layout.
pub fn parse_created_at(value: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    // chrono treats `%.f` as optional, so check for the fraction up front
    if value.as_bytes().get(FRACTION_OFFSET) != Some(&b'.') {
        return Err(TimestampError::MissingFraction(value.to_string()));
    }
    // ...and accepts up to nanoseconds, so bound the digit count too
    let digits = value.as_bytes()[FRACTION_OFFSET + 1..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 || digits > MAX_FRACTION_DIGITS {
        return Err(TimestampError::FractionDigits(value.to_string()));
    }

    let normalized = value
        .strip_suffix('Z')
        .map_or_else(|| value.to_string(), |rest| format!("{rest}+00:00"));

    DateTime::parse_from_str(&normalized, CREATED_AT_FORMAT).map_err(|source| {
        TimestampError::Format {
            value: value.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    fn topic() -> SearchTopic {
        SearchTopic {
            id: 5,
            fancy_title: "Hello World".to_string(),
        }
    }

    fn post(name: Option<&str>) -> SearchPost {
        SearchPost {
            topic_id: 5,
            post_number: 3,
            name: name.map(ToString::to_string),
            username: "alice".to_string(),
            blurb: "first line of the post".to_string(),
            created_at: "2024-01-02T03:04:05.123456+00:00".to_string(),
        }
    }

    #[test]
    fn test_record_fields() {
        let record =
            PostRecord::from_search_post("https://forum.example.com", &topic(), &post(None))
                .unwrap();

        assert_eq!(record.title, "Hello World [3]");
        assert_eq!(record.url, "https://forum.example.com/t/5/3");
        assert_eq!(record.snippet, "alice: first line of the post");
        assert_eq!(record.timestamp.to_rfc3339(), "2024-01-02T03:04:05.123456+00:00");
    }

    #[test]
    fn test_author_prefers_display_name() {
        let record = PostRecord::from_search_post(
            "https://forum.example.com",
            &topic(),
            &post(Some("Alice A.")),
        )
        .unwrap();
        assert_eq!(record.snippet, "Alice A.: first line of the post");
    }

    #[test]
    fn test_parse_created_at_offsets() {
        let utc = parse_created_at("2024-01-02T03:04:05.123+00:00").unwrap();
        assert_eq!(
            utc,
            FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
                .unwrap()
                .with_nanosecond(123_000_000)
                .unwrap()
        );

        let zulu = parse_created_at("2024-01-02T03:04:05.123Z").unwrap();
        assert_eq!(zulu, utc);

        let compact = parse_created_at("2024-01-02T03:04:05.123+0000").unwrap();
        assert_eq!(compact, utc);

        let shifted = parse_created_at("2024-01-02T05:04:05.123+02:00").unwrap();
        assert_eq!(shifted, utc);
        assert_eq!(shifted.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn test_parse_created_at_is_strict() {
        assert!(matches!(
            parse_created_at("2024-01-02T03:04:05+00:00"),
            Err(TimestampError::MissingFraction(_))
        ));
        assert!(matches!(
            parse_created_at("2024-01-02T03:04:05.1234567+00:00"),
            Err(TimestampError::FractionDigits(_))
        ));
        assert!(matches!(
            parse_created_at("2024-01-02T03:04:05.123456789Z"),
            Err(TimestampError::FractionDigits(_))
        ));
        assert!(matches!(
            parse_created_at("2024-01-02T03:04:05.+00:00"),
            Err(TimestampError::FractionDigits(_))
        ));
        assert!(parse_created_at("2024-01-02T03:04:05.1+00:00").is_ok());
        assert!(parse_created_at("2024-01-02T03:04:05.123456+00:00").is_ok());
        assert!(matches!(
            parse_created_at("2024-01-02T03:04:05.123"),
            Err(TimestampError::Format { .. })
        ));
        assert!(matches!(
            parse_created_at("2024-01-02 03:04:05.123+00:00"),
            Err(TimestampError::Format { .. })
        ));
        assert!(parse_created_at("yesterday").is_err());
        assert!(parse_created_at("").is_err());
    }
}
