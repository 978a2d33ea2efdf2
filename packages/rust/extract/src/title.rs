//! Declared-title to headline matching.
//!
//! Page titles carry site chrome ("Post Title | Some Blog"), so the match
//! is fuzzy: the headline must share a long contiguous character run with
//! the `<title>` text rather than equal it.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use webchurn_shared::{Result, WebchurnError};

/// Minimum shared-substring length for a headline to match the title.
const MIN_MATCH_LEN: usize = 20;

/// Find the `<h1>` whose text shares a long enough run with the `<title>`.
///
/// Fails with [`WebchurnError::MissingTitleDeclaration`] when the document
/// has no `<title>` element, and [`WebchurnError::NoHeadlineMatch`] when no
/// headline resembles the declared title.
pub(crate) fn resolve_title(doc: &Html) -> Result<ElementRef<'_>> {
    let title_sel = Selector::parse("title").unwrap();
    let h1_sel = Selector::parse("h1").unwrap();

    let declared = doc
        .select(&title_sel)
        .next()
        .ok_or(WebchurnError::MissingTitleDeclaration)?;
    let declared = declared.text().collect::<String>().trim().to_string();

    for heading in doc.select(&h1_sel) {
        let text = heading.text().collect::<String>().trim().to_string();
        if text.is_empty() {
            continue;
        }

        let shared = longest_common_run(&text, &declared);
        if shared >= MIN_MATCH_LEN {
            debug!(headline = %text, shared, "headline matched declared title");
            return Ok(heading);
        }
    }

    Err(WebchurnError::NoHeadlineMatch)
}

/// Length of the longest contiguous character run shared by two strings.
pub(crate) fn longest_common_run(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // One DP row per character of `a`; only the previous row is live.
    let mut prev = vec![0usize; b.len() + 1];
    let mut best = 0;
    for ca in &a {
        let mut row = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                row[j + 1] = prev[j] + 1;
                best = best.max(row[j + 1]);
            }
        }
        prev = row;
    }
    best
}
