//! Rich content → document model.
//!
//! # Rules
//! - Headings (1–3) emit one heading paragraph; paragraphs emit one body paragraph.
//! - A block-level line break emits one empty paragraph. A line break inside a
//!   heading, paragraph, or list item emits a `"\n"` run instead of being dropped,
//!   so `<br>` inside a paragraph still breaks the line in the exported file.
//! - Lists emit one paragraph per direct `ListItem`, prefixed with `"• "` or `"{n}. "`.
//!   Ordered numbering starts at 1 for every list.
//! - Containers, emphasis, and stray list items never emit a paragraph themselves.
//! - Whitespace-only text is dropped everywhere.
//!
//! Style marks flow down as an immutable `StyleSet` argument, so sibling subtrees
//! never share state. The conversion is total: every tree converts.

use crate::content::node::{ContentNode, StyleSet};
use crate::convert::model::{Document, Paragraph, Run};

/// Marker run for unordered list items.
pub const BULLET: &str = "• ";

/// Converts a content tree into a fresh `Document`.
pub fn convert(root: &ContentNode) -> Document {
    let mut paragraphs = Vec::new();
    emit_blocks(root, StyleSet::PLAIN, &mut paragraphs);
    Document { paragraphs }
}

// ────────────────────────────────────────────────────────────────────────────
// Block level
// ────────────────────────────────────────────────────────────────────────────

fn emit_blocks(node: &ContentNode, style: StyleSet, out: &mut Vec<Paragraph>) {
    match node {
        ContentNode::Text { text, style: own } => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push(Paragraph::body(vec![Run::styled(trimmed, style.merge(*own))]));
            }
        }
        ContentNode::Heading { level, children } => {
            out.push(Paragraph::heading(*level, collect_runs(children, style)));
        }
        ContentNode::Paragraph(children) => {
            out.push(Paragraph::body(collect_runs(children, style)));
        }
        ContentNode::LineBreak => out.push(Paragraph::blank()),
        ContentNode::UnorderedList(children) => {
            for item in list_items(children) {
                out.push(list_paragraph(Run::plain(BULLET), item, style));
            }
        }
        ContentNode::OrderedList(children) => {
            for (index, item) in list_items(children).enumerate() {
                let marker = Run::plain(format!("{}. ", index + 1));
                out.push(list_paragraph(marker, item, style));
            }
        }
        ContentNode::Emphasis { mark, children } => {
            let inner = style.with(*mark);
            for child in children {
                emit_blocks(child, inner, out);
            }
        }
        // Unknown tags, the document root, and list items outside a list.
        ContentNode::Container { .. } | ContentNode::ListItem(_) => {
            for child in node.children() {
                emit_blocks(child, style, out);
            }
        }
    }
}

/// Direct `ListItem` children of a list; anything else directly under a list is ignored.
fn list_items<'a>(
    children: &'a [ContentNode],
) -> impl Iterator<Item = &'a [ContentNode]> + 'a {
    children.iter().filter_map(|child| match child {
        ContentNode::ListItem(item) => Some(item.as_slice()),
        _ => None,
    })
}

fn list_paragraph(marker: Run, item: &[ContentNode], style: StyleSet) -> Paragraph {
    let mut runs = vec![marker];
    runs.extend(collect_runs(item, style));
    Paragraph::body(runs)
}

// ────────────────────────────────────────────────────────────────────────────
// Run level
// ────────────────────────────────────────────────────────────────────────────

fn collect_runs(nodes: &[ContentNode], style: StyleSet) -> Vec<Run> {
    let mut runs = Vec::new();
    for node in nodes {
        push_runs(node, style, &mut runs);
    }
    runs
}

/// Flattens `node` into runs. Text keeps its surrounding whitespace here so that
/// adjacent runs still read naturally ("Bold part" + " plain part").
fn push_runs(node: &ContentNode, style: StyleSet, runs: &mut Vec<Run>) {
    match node {
        ContentNode::Text { text, style: own } => {
            if !text.trim().is_empty() {
                runs.push(Run::styled(text.as_str(), style.merge(*own)));
            }
        }
        ContentNode::LineBreak => runs.push(Run::line_break()),
        ContentNode::Emphasis { mark, children } => {
            let inner = style.with(*mark);
            for child in children {
                push_runs(child, inner, runs);
            }
        }
        // Nested lists are not numbered: each nested item starts on a new line
        // inside the enclosing paragraph, without a marker.
        ContentNode::UnorderedList(children) | ContentNode::OrderedList(children) => {
            for item in list_items(children) {
                runs.push(Run::line_break());
                for child in item {
                    push_runs(child, style, runs);
                }
            }
        }
        ContentNode::Heading { .. }
        | ContentNode::Paragraph(_)
        | ContentNode::ListItem(_)
        | ContentNode::Container { .. } => {
            for child in node.children() {
                push_runs(child, style, runs);
            }
        }
    }
}
