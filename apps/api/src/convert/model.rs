//! Document model: the output side of the converter.
//!
//! A `Document` is created fresh for every conversion and handed straight to a
//! serializer (DOCX packer, page estimator, JSON preview). It has no identity of its own.

use serde::Serialize;

use crate::content::node::{HeadingLevel, StyleSet};

/// Spacing hints are in twentieths of a point (the unit DOCX uses for paragraph spacing).
pub const SPACING_HEADING_1: u32 = 200;
pub const SPACING_HEADING_2: u32 = 150;
pub const SPACING_HEADING_3: u32 = 100;
pub const SPACING_BODY: u32 = 80;
pub const SPACING_BLANK: u32 = 0;

/// Text that a serializer renders as a soft line break rather than as characters.
pub const LINE_BREAK: &str = "\n";

// ────────────────────────────────────────────────────────────────────────────
// Run
// ────────────────────────────────────────────────────────────────────────────

/// A contiguous span of text sharing one style set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, StyleSet::PLAIN)
    }

    pub fn styled(text: impl Into<String>, style: StyleSet) -> Self {
        Self {
            text: text.into(),
            bold: style.bold,
            italic: style.italic,
            underline: style.underline,
        }
    }

    pub fn line_break() -> Self {
        Self::plain(LINE_BREAK)
    }

    pub fn style(&self) -> StyleSet {
        StyleSet {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
        }
    }

    pub fn is_line_break(&self) -> bool {
        self.text == LINE_BREAK
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Paragraph
// ────────────────────────────────────────────────────────────────────────────

/// Semantic role of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphRole {
    Body,
    Heading(HeadingLevel),
}

/// One block-level unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub role: ParagraphRole,
    /// Space after the paragraph, in twentieths of a point.
    pub spacing_after: u32,
}

impl Paragraph {
    pub fn body(runs: Vec<Run>) -> Self {
        Self {
            runs,
            role: ParagraphRole::Body,
            spacing_after: SPACING_BODY,
        }
    }

    /// Larger headings get more trailing space.
    pub fn heading(level: HeadingLevel, runs: Vec<Run>) -> Self {
        let spacing_after = match level {
            HeadingLevel::H1 => SPACING_HEADING_1,
            HeadingLevel::H2 => SPACING_HEADING_2,
            HeadingLevel::H3 => SPACING_HEADING_3,
        };
        Self {
            runs,
            role: ParagraphRole::Heading(level),
            spacing_after,
        }
    }

    /// Empty paragraph preserving a blank line from the source.
    pub fn blank() -> Self {
        Self {
            runs: Vec::new(),
            role: ParagraphRole::Body,
            spacing_after: SPACING_BLANK,
        }
    }

    /// Concatenated run text, line breaks included.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// Ordered sequence of paragraphs produced by one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn run_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.runs.len()).sum()
    }
}
