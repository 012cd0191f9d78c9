use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub category: String,
    pub summary: String,
    pub link: String,
    /// Free-form date label as shown to readers, e.g. "2 hours ago".
    pub published: String,
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

/// Result of a related-articles lookup. `related` never exceeds six entries,
/// never repeats a title, and never contains the article being viewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationResult {
    pub related: Vec<Article>,
    pub keywords: Vec<String>,
}

impl RelationResult {
    pub fn empty(keywords: Vec<String>) -> Self {
        Self {
            related: Vec::new(),
            keywords,
        }
    }
}

/// One node of a parsed assistant response, consumed by the client renderer.
///
/// Paragraph lines keep the original text so the renderer can still apply
/// inline emphasis; list items carry marker-stripped text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    Header { level: u8, text: String },
    Paragraph { lines: Vec<String> },
    BulletList { items: Vec<String> },
    NumberedList { items: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_deserializes_without_fetched_at() {
        let article: Article = serde_json::from_str(
            r#"{
                "title": "Test Article",
                "source": "test",
                "category": "Politics",
                "summary": "A test summary.",
                "link": "http://test.com",
                "published": "today"
            }"#,
        )
        .unwrap();
        assert_eq!(article.title, "Test Article");
    }

    #[test]
    fn test_section_serializes_with_type_tag() {
        let section = Section::BulletList {
            items: vec!["point one".to_string()],
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "bullet_list");
        assert_eq!(json["items"][0], "point one");
    }
}
