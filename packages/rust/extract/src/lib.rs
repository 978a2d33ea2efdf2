//! Readable-content extraction engine.
//!
//! Takes a raw HTML page and its request URL, locates the article body,
//! matches the declared `<title>` to a headline, hunts for a publish date
//! near that headline, and renders the body as markdown with relative
//! links resolved against the source URL.
//!
//! The pipeline is synchronous and side-effect free: one parse tree per
//! call, read-only after `<script>`/`<style>` removal, discarded on
//! return. Identical input yields byte-identical output.

mod collect;
mod container;
mod date;
mod dom;
mod render;
mod title;

use scraper::Html;
use tracing::{debug, instrument};

use webchurn_shared::{Article, Result};

/// Extract title, date, and markdown content from one page.
///
/// Fails with [`webchurn_shared::WebchurnError::MissingTitleDeclaration`]
/// or [`webchurn_shared::WebchurnError::NoHeadlineMatch`] when the
/// document's title cannot be pinned to a headline; a missing date is not
/// an error.
#[instrument(skip(raw_html), fields(url = %source_url))]
pub fn extract(source_url: &str, raw_html: &str) -> Result<Article> {
    let mut doc = Html::parse_document(raw_html);
    dom::strip_noise(&mut doc);

    let container = container::locate_container(&doc);
    let sequence = collect::collect_tags(container);
    debug!(tags = sequence.len(), "tag sequence collected");

    let headline = title::resolve_title(&doc)?;
    let date = date::resolve_date(*headline);

    let content = render::render_sequence(source_url, &sequence);

    Ok(Article {
        title: headline.text().collect::<String>().trim().to_string(),
        date,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use webchurn_shared::WebchurnError;

    fn load_fixture(name: &str) -> String {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
    }

    #[test]
    fn extracts_article_fixture() {
        let html = load_fixture("html/article.html");
        let article =
            extract("https://blog.example.com/posts/borrow-checker", &html).unwrap();

        assert_eq!(article.title, "Understanding the Rust Borrow Checker");
        assert_eq!(article.date.as_deref(), Some("March 5, 2019"));

        assert!(article.content.contains("# Understanding the Rust Borrow Checker\n"));
        assert!(article.content.contains("enforces ownership,"));
        assert!(article.content.contains("> Shared references are immutable"));
        assert!(article.content.contains(
            "[follow-up on lifetimes](https://blog.example.com/posts/lifetimes)"
        ));
        assert!(article.content.contains(
            "![image not found](https://blog.example.com/posts/borrow-checker/images/borrow-diagram.png)"
        ));
    }

    #[test]
    fn fixture_extraction_skips_chrome_and_noise() {
        let html = load_fixture("html/article.html");
        let article =
            extract("https://blog.example.com/posts/borrow-checker", &html).unwrap();

        // Outside the container: navigation and footer.
        assert!(!article.content.contains("Archive"));
        assert!(!article.content.contains("Copyright"));
        // Stripped before analysis.
        assert!(!article.content.contains("analytics"));
        // Lists are collected but have no render rule.
        assert!(!article.content.contains("One owner per value"));
        // The byline span is not a whitelisted tag.
        assert!(!article.content.contains("March"));
    }

    #[test]
    fn missing_title_declaration_propagates() {
        let err = extract(
            "https://example.com/",
            "<html><body><h1>A Heading Without A Declared Title</h1></body></html>",
        )
        .unwrap_err();
        assert!(matches!(err, WebchurnError::MissingTitleDeclaration));
    }

    #[test]
    fn unmatched_headline_propagates() {
        let err = extract(
            "https://example.com/",
            "<html><head><title>An Entirely Different Declared Title</title></head>\
             <body><h1>Short</h1><p>body text</p></body></html>",
        )
        .unwrap_err();
        assert!(matches!(err, WebchurnError::NoHeadlineMatch));
    }

    #[test]
    fn missing_date_is_none() {
        let article = extract(
            "https://example.com/",
            "<html><head><title>A Page With No Date Anywhere</title></head>\
             <body><h1>A Page With No Date Anywhere</h1>\
             <p>words but nothing that parses as a date</p></body></html>",
        )
        .unwrap();
        assert_eq!(article.date, None);
    }

    #[test]
    fn extraction_is_deterministic() {
        let html = load_fixture("html/article.html");
        let first = extract("https://blog.example.com/posts/borrow-checker", &html).unwrap();
        let second = extract("https://blog.example.com/posts/borrow-checker", &html).unwrap();
        assert_eq!(first, second);
    }
}
