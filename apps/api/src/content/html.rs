//! Editor HTML → `ContentNode` tree.
//!
//! The rich-text editor emits a small HTML vocabulary (`h1`–`h3`, `p`, `ul`/`ol`/`li`,
//! `strong`/`em`/`u`, `br`). Everything is parsed with html5ever so malformed markup is
//! repaired the same way a browser would, then only the `<body>` subtree is mapped.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::content::node::{ContentNode, Emphasis, HeadingLevel};
use crate::content::ContentError;

/// Elements whose content is never document text.
const DROPPED_TAGS: &[&str] = &["head", "script", "style", "template", "noscript"];

/// Parses an HTML fragment or document into a content tree rooted at an untagged
/// `Container`. Unknown tags become tagged containers; comments and doctypes are dropped.
pub fn parse_html(html: &str) -> Result<ContentNode, ContentError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let children = match find_element(&dom.document, "body") {
        Some(body) => map_children(&body),
        None => Vec::new(),
    };

    Ok(ContentNode::root(children))
}

// ────────────────────────────────────────────────────────────────────────────
// DOM walk
// ────────────────────────────────────────────────────────────────────────────

/// Depth-first search for the first element named `tag`.
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { ref name, .. } = handle.data {
        if &*name.local == tag {
            return Some(handle.clone());
        }
    }

    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

fn map_children(handle: &Handle) -> Vec<ContentNode> {
    handle.children.borrow().iter().filter_map(map_node).collect()
}

fn map_node(handle: &Handle) -> Option<ContentNode> {
    match handle.data {
        NodeData::Text { ref contents } => Some(ContentNode::text(contents.borrow().to_string())),
        NodeData::Element { ref name, .. } => map_element(&name.local.to_ascii_lowercase(), handle),
        NodeData::Document
        | NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => None,
    }
}

fn map_element(tag: &str, handle: &Handle) -> Option<ContentNode> {
    if DROPPED_TAGS.contains(&tag) {
        return None;
    }

    let node = match tag {
        "h1" | "h2" | "h3" => {
            let level = tag[1..]
                .parse::<u8>()
                .ok()
                .and_then(HeadingLevel::from_number)?;
            ContentNode::heading(level, map_children(handle))
        }
        "p" => ContentNode::Paragraph(map_children(handle)),
        "ul" => ContentNode::UnorderedList(map_children(handle)),
        "ol" => ContentNode::OrderedList(map_children(handle)),
        "li" => ContentNode::ListItem(map_children(handle)),
        "br" => ContentNode::LineBreak,
        "strong" | "b" => ContentNode::emphasis(Emphasis::Bold, map_children(handle)),
        "em" | "i" => ContentNode::emphasis(Emphasis::Italic, map_children(handle)),
        "u" => ContentNode::emphasis(Emphasis::Underline, map_children(handle)),
        other => ContentNode::container(other, map_children(handle)),
    };

    Some(node)
}
