use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub post_id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub image_url: String,
    /// ISO-8601 timestamp as sent by the backend.
    pub published_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Publish date as `Month D, YYYY`; the raw value when it is not ISO-8601.
    pub fn published_label(&self) -> String {
        format_publish_date(&self.published_at)
    }

    /// Content split on blank lines, with empty paragraphs dropped.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .collect()
    }
}

fn format_publish_date(raw: &str) -> String {
    parse_publish_date(raw).map_or_else(
        || raw.trim().to_string(),
        |date| date.format("%B %-d, %Y").to_string(),
    )
}

/// Accepts RFC 3339, a naive `T`-separated timestamp, or a bare date.
fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::{BlogPost, format_publish_date};

    #[test]
    fn publish_dates_are_human_readable() {
        assert_eq!(
            format_publish_date("2025-01-05T10:30:00+00:00"),
            "January 5, 2025"
        );
        assert_eq!(format_publish_date("2024-12-31"), "December 31, 2024");
        assert_eq!(
            format_publish_date("2025-03-09T18:45:12.123456"),
            "March 9, 2025"
        );
    }

    #[test]
    fn unparseable_dates_are_kept() {
        assert_eq!(format_publish_date("yesterday"), "yesterday");
        assert_eq!(format_publish_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_publish_date(""), "");
    }

    #[test]
    fn impossible_calendar_dates_are_kept() {
        assert_eq!(format_publish_date("2024-02-31"), "2024-02-31");
        assert_eq!(format_publish_date("2023-04-31T09:00:00"), "2023-04-31T09:00:00");
        assert_eq!(format_publish_date("2024-02-29"), "February 29, 2024");
    }

    #[test]
    fn post_deserializes_and_splits_paragraphs() {
        let json = r#"{
            "post_id": "post_1",
            "title": "Risk 101",
            "slug": "risk-101",
            "excerpt": "Why position sizing matters",
            "content": "First paragraph.\n\n\n\nSecond paragraph.\n\n  ",
            "author": "Trading Academy",
            "image_url": "https://images.example/risk.jpg",
            "published_at": "2025-02-10T08:00:00",
            "tags": ["risk", "beginner"]
        }"#;
        let post: BlogPost = serde_json::from_str(json).expect("post");
        assert_eq!(post.paragraphs(), vec!["First paragraph.", "Second paragraph."]);
        assert_eq!(post.published_label(), "February 10, 2025");
        assert_eq!(post.tags.len(), 2);
    }
}
