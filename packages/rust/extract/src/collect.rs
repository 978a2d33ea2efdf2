//! Important-tag collection.
//!
//! Only a fixed set of tag names is eligible for rendering; everything
//! else is structurally invisible here. Nested matches collapse into
//! their outermost ancestor, which still renders the inner ones through
//! recursive descent.

use std::collections::HashSet;

use ego_tree::NodeRef;
use scraper::Node;

use crate::dom::tag_name;

/// Tag names eligible for markdown rendering.
const IMPORTANT_TAGS: [&str; 12] = [
    "p", "ul", "ol", "img", "h1", "h2", "h3", "h4", "h5", "h6", "a", "blockquote",
];

fn is_important(name: &str) -> bool {
    IMPORTANT_TAGS.contains(&name)
}

/// Collect the outermost important tags under `container`, in document
/// order. The container itself participates when its own tag qualifies.
pub(crate) fn collect_tags(container: NodeRef<'_, Node>) -> Vec<NodeRef<'_, Node>> {
    let matched: Vec<NodeRef<'_, Node>> = container
        .descendants()
        .filter(|node| tag_name(*node).is_some_and(is_important))
        .collect();

    let ids: HashSet<_> = matched.iter().map(|node| node.id()).collect();

    // Keep only nodes with no matched proper ancestor.
    matched
        .into_iter()
        .filter(|node| !node.ancestors().any(|ancestor| ids.contains(&ancestor.id())))
        .collect()
}
