//! Article container location.
//!
//! Anchors on the densest paragraph, then widens upward until the current
//! ancestor holds a majority of the page's words. The widening is what
//! pulls in the structure a single paragraph excludes: headings, captions,
//! inline images.

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};
use tracing::debug;

use crate::dom::word_count;

/// Find the subtree most likely to hold the article body.
///
/// Candidates are all `<p>` elements, falling back to `<div>` on
/// paragraph-free pages; ties go to the first candidate seen. With no
/// candidates at all the walk starts (and ends) at the document root.
pub(crate) fn locate_container(doc: &Html) -> NodeRef<'_, Node> {
    let root = doc.tree.root();
    let total_words = word_count(root);

    let p_sel = Selector::parse("p").unwrap();
    let div_sel = Selector::parse("div").unwrap();

    let mut candidates: Vec<NodeRef<'_, Node>> = doc.select(&p_sel).map(|el| *el).collect();
    if candidates.is_empty() {
        candidates = doc.select(&div_sel).map(|el| *el).collect();
    }

    let mut densest = root;
    let mut densest_words = 0;
    for candidate in candidates {
        let words = word_count(candidate);
        if words > densest_words {
            densest_words = words;
            densest = candidate;
        }
    }

    let mut current = densest;
    while let Some(parent) = current.parent() {
        current = parent;
        if word_count(current) * 2 > total_words {
            break;
        }
    }

    debug!(
        total_words,
        captured = word_count(current),
        "container located"
    );
    current
}
