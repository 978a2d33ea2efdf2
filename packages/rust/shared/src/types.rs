//! Core domain types for webchurn extractions.

use serde::{Deserialize, Serialize};

/// The result of churning one page: title, date, and markdown body.
///
/// This is the exact shape emitted as JSON by the CLI. A missing date is
/// `None` and serializes as `null`, never as an absent field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Trimmed text of the headline that matched the declared title.
    pub title: String,
    /// Long-form publish date ("March 5, 2019"), if one was found.
    pub date: Option<String>,
    /// Markdown rendering of the article body.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_serialization_roundtrip() {
        let article = Article {
            title: "A Headline".into(),
            date: Some("March 5, 2019".into()),
            content: "# A Headline\n".into(),
        };

        let json = serde_json::to_string(&article).expect("serialize");
        let parsed: Article = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, article);
    }

    #[test]
    fn missing_date_serializes_as_null() {
        let article = Article {
            title: "Untitled".into(),
            date: None,
            content: String::new(),
        };

        let json = serde_json::to_string(&article).expect("serialize");
        assert!(json.contains(r#""date":null"#));
    }
}
