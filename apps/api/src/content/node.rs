//! Parsed rich-content tree, the input side of the document converter.
//!
//! Both front-ends (editor HTML and generated Markdown) produce a `ContentNode` tree.
//! The tree covers headings 1–3, paragraphs, lists, line breaks,
//! three emphasis marks, and a catch-all `Container` for everything else.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Style set
// ────────────────────────────────────────────────────────────────────────────

/// One of the three emphasis marks an ancestor can apply to descendant text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Bold,
    Italic,
    Underline,
}

/// Inline formatting attributes shared by a span of text.
///
/// A `StyleSet` is a plain value: extending it returns a new set and leaves the
/// original untouched, so sibling subtrees never observe each other's marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleSet {
    pub const PLAIN: StyleSet = StyleSet {
        bold: false,
        italic: false,
        underline: false,
    };

    /// Returns a copy of this set with `mark` switched on.
    pub fn with(self, mark: Emphasis) -> Self {
        match mark {
            Emphasis::Bold => Self { bold: true, ..self },
            Emphasis::Italic => Self {
                italic: true,
                ..self
            },
            Emphasis::Underline => Self {
                underline: true,
                ..self
            },
        }
    }

    /// Union of two style sets.
    pub fn merge(self, other: StyleSet) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Heading level
// ────────────────────────────────────────────────────────────────────────────

/// Heading levels the editor toolbar can produce. Deeper levels are not headings
/// as far as the converter is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Maps `1..=3` to a level; anything else is not a supported heading.
    pub fn from_number(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content node
// ────────────────────────────────────────────────────────────────────────────

/// A node in the parsed rich-content tree. Child order is document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// Text leaf. `style` holds marks carried by the node itself; marks from
    /// `Emphasis` ancestors are added during conversion.
    Text { text: String, style: StyleSet },
    Heading {
        level: HeadingLevel,
        children: Vec<ContentNode>,
    },
    Paragraph(Vec<ContentNode>),
    UnorderedList(Vec<ContentNode>),
    OrderedList(Vec<ContentNode>),
    ListItem(Vec<ContentNode>),
    LineBreak,
    Emphasis {
        mark: Emphasis,
        children: Vec<ContentNode>,
    },
    /// Any tag outside the known vocabulary, and the document root.
    Container {
        tag: Option<String>,
        children: Vec<ContentNode>,
    },
}

impl ContentNode {
    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text {
            text: text.into(),
            style: StyleSet::PLAIN,
        }
    }

    pub fn styled_text(text: impl Into<String>, style: StyleSet) -> Self {
        ContentNode::Text {
            text: text.into(),
            style,
        }
    }

    pub fn heading(level: HeadingLevel, children: Vec<ContentNode>) -> Self {
        ContentNode::Heading { level, children }
    }

    pub fn emphasis(mark: Emphasis, children: Vec<ContentNode>) -> Self {
        ContentNode::Emphasis { mark, children }
    }

    /// Root container with no tag name.
    pub fn root(children: Vec<ContentNode>) -> Self {
        ContentNode::Container {
            tag: None,
            children,
        }
    }

    pub fn container(tag: impl Into<String>, children: Vec<ContentNode>) -> Self {
        ContentNode::Container {
            tag: Some(tag.into()),
            children,
        }
    }

    /// Direct children of this node; leaves return an empty slice.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Text { .. } | ContentNode::LineBreak => &[],
            ContentNode::Heading { children, .. }
            | ContentNode::Emphasis { children, .. }
            | ContentNode::Container { children, .. } => children,
            ContentNode::Paragraph(children)
            | ContentNode::UnorderedList(children)
            | ContentNode::OrderedList(children)
            | ContentNode::ListItem(children) => children,
        }
    }
}
