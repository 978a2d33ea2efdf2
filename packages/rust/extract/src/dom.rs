//! Tree helpers over the parsed HTML document.
//!
//! The parse tree lives in an `ego_tree` arena owned by [`scraper::Html`];
//! every reference into it is a copyable [`NodeRef`] handle, so upward
//! walks (container climbing, date scope widening) never touch ownership.

use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node};

/// Tag names whose subtrees are deleted before any analysis.
const STRIPPED_TAGS: [&str; 2] = ["script", "style"];

/// Tag name of `node`, if it is an element.
pub(crate) fn tag_name<'a>(node: NodeRef<'a, Node>) -> Option<&'a str> {
    node.value().as_element().map(|el| el.name())
}

/// Concatenated text of every text node under `node`, in document order.
pub(crate) fn collect_text(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        if let Some(text) = descendant.value().as_text() {
            out.push_str(&text.text);
        }
    }
    out
}

/// Number of whitespace-separated words under `node`.
pub(crate) fn word_count(node: NodeRef<'_, Node>) -> usize {
    collect_text(node).split_whitespace().count()
}

/// The sole text of `node`: its single text child, reached through a chain
/// of only-children. An element with siblings or mixed content has none.
pub(crate) fn sole_text(node: NodeRef<'_, Node>) -> Option<String> {
    let mut current = node;
    loop {
        let mut children = current.children();
        let only = children.next()?;
        if children.next().is_some() {
            return None;
        }

        if let Some(text) = only.value().as_text() {
            return Some(text.trim().to_string());
        }
        if !only.value().is_element() {
            return None;
        }
        current = only;
    }
}

/// Detach every `<script>` and `<style>` subtree from the document.
pub(crate) fn strip_noise(doc: &mut Html) {
    let doomed: Vec<NodeId> = doc
        .tree
        .root()
        .descendants()
        .filter(|node| tag_name(*node).is_some_and(|name| STRIPPED_TAGS.contains(&name)))
        .map(|node| node.id())
        .collect();

    for id in doomed {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}
