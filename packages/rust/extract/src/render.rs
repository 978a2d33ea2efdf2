//! Markdown rendering of the collected tag sequence.
//!
//! The mapping is whitelist-driven: a tag without a rule renders as the
//! empty string and takes its whole subtree with it. Relative link and
//! image targets are rewritten against the request URL with a three-case
//! scheme, not full RFC resolution.

use ego_tree::NodeRef;
use scraper::Node;
use url::Url;

/// Render a sequence of nodes, joined with single spaces.
pub(crate) fn render_sequence(source_url: &str, nodes: &[NodeRef<'_, Node>]) -> String {
    nodes
        .iter()
        .map(|node| render_node(source_url, *node))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_children(source_url: &str, node: NodeRef<'_, Node>) -> String {
    let children: Vec<NodeRef<'_, Node>> = node.children().collect();
    render_sequence(source_url, &children)
}

/// Render one node to markdown. Mutually recursive with the sequence
/// rendering above.
fn render_node(source_url: &str, node: NodeRef<'_, Node>) -> String {
    if let Some(text) = node.value().as_text() {
        return text.trim().to_string();
    }
    let Some(element) = node.value().as_element() else {
        return String::new();
    };

    match element.name() {
        "p" => format!("{}\n\n", render_children(source_url, node)),
        "h1" => format!("# {}\n", render_children(source_url, node)),
        // h2 through h4 share one markdown level.
        "h2" | "h3" | "h4" => format!("## {}\n", render_children(source_url, node)),
        "h5" => format!("### {}\n", render_children(source_url, node)),
        "h6" => format!("#### {}\n", render_children(source_url, node)),
        "img" | "image" => format!(
            "![image not found]({})",
            resolve_url(source_url, element.attr("src").unwrap_or(""))
        ),
        "a" => format!(
            "[{}]({})",
            render_children(source_url, node),
            resolve_url(source_url, element.attr("href").unwrap_or(""))
        ),
        "blockquote" => format!("> {}\n\n", render_children(source_url, node)),
        _ => String::new(),
    }
}

/// Resolve a raw href/src against the request URL.
///
/// Three cases, in order: absolute http(s) URLs pass through unchanged,
/// host-absolute paths take the base's `scheme://host`, and anything else
/// concatenates onto the base (with a `/` inserted when the base lacks a
/// trailing one). No `..` normalization, no query or fragment handling.
pub(crate) fn resolve_url(base: &str, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }
    if let Some(stripped) = raw.strip_prefix('/') {
        return match Url::parse(base) {
            Ok(parsed) => format!("{}/{stripped}", parsed.origin().ascii_serialization()),
            Err(_) => raw.to_string(),
        };
    }
    if base.ends_with('/') {
        format!("{base}{raw}")
    } else {
        format!("{base}/{raw}")
    }
}
