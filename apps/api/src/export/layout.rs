//! Page estimate: how much paper a converted document will occupy.
//!
//! Character widths use a single average em width per font size rather than glyph
//! tables. That is enough to tell a one-page résumé from a two-page one; it is not a
//! typesetter. Defaults follow the PDF export: A4, 0.5" margins, 11pt body text.

use serde::Serialize;

use crate::content::node::HeadingLevel;
use crate::convert::model::{Document, Paragraph, ParagraphRole, LINE_BREAK};

const POINTS_PER_INCH: f32 = 72.0;
/// Spacing hints are in twentieths of a point.
const SPACING_UNITS_PER_POINT: f32 = 20.0;
/// Headings are set bold; bold glyphs run slightly wider.
const BOLD_WIDTH_FACTOR: f32 = 1.05;

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PageConfig {
    pub page_width_in: f32,
    pub page_height_in: f32,
    /// Same margin on all four sides.
    pub margin_in: f32,
    pub body_font_pt: f32,
    /// Average glyph advance in em units.
    pub average_char_width_em: f32,
    /// Line height as a multiple of font size.
    pub line_height: f32,
}

/// A4 portrait, 0.5" margins, 11pt body.
pub fn a4_page_config() -> PageConfig {
    PageConfig {
        page_width_in: 8.27,
        page_height_in: 11.69,
        margin_in: 0.5,
        body_font_pt: 11.0,
        average_char_width_em: 0.5,
        line_height: 1.2,
    }
}

impl PageConfig {
    pub fn text_width_pt(&self) -> f32 {
        (self.page_width_in - 2.0 * self.margin_in) * POINTS_PER_INCH
    }

    pub fn text_height_pt(&self) -> f32 {
        (self.page_height_in - 2.0 * self.margin_in) * POINTS_PER_INCH
    }

    /// Font size for a paragraph role; heading sizes match the DOCX heading styles.
    pub fn font_size_pt(&self, role: ParagraphRole) -> f32 {
        match role {
            ParagraphRole::Body => self.body_font_pt,
            ParagraphRole::Heading(HeadingLevel::H1) => 16.0,
            ParagraphRole::Heading(HeadingLevel::H2) => 14.0,
            ParagraphRole::Heading(HeadingLevel::H3) => 13.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Estimate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageEstimate {
    pub total_lines: u32,
    pub content_height_pt: f32,
    pub pages: u32,
    /// Fraction of the last page that is used (0.0 – 1.0).
    pub last_page_fill: f32,
    pub fits_single_page: bool,
}

/// Greedy word-wrap of `text` at `font_pt`. Returns the number of printed lines.
///
/// Embedded line breaks start a new line. Empty text still occupies one line,
/// which is how a blank paragraph prints.
pub fn simulate_lines(text: &str, font_pt: f32, width_factor: f32, config: &PageConfig) -> u32 {
    let char_width = font_pt * config.average_char_width_em * width_factor;
    let max_width = config.text_width_pt();

    text.split(LINE_BREAK)
        .map(|segment| wrap_segment(segment, char_width, max_width))
        .sum()
}

fn wrap_segment(segment: &str, char_width: f32, max_width: f32) -> u32 {
    let mut lines = 1;
    let mut current_width = 0.0_f32;
    let mut first_on_line = true;

    for word in segment.split_whitespace() {
        let word_w = word.chars().count() as f32 * char_width;
        let space_w = if first_on_line { 0.0 } else { char_width };

        if !first_on_line && current_width + space_w + word_w > max_width {
            lines += 1;
            current_width = word_w;
        } else {
            current_width += space_w + word_w;
            first_on_line = false;
        }
        // A single word wider than the line wraps mid-word.
        while current_width > max_width {
            lines += 1;
            current_width -= max_width;
        }
    }
    lines
}

fn paragraph_height(paragraph: &Paragraph, config: &PageConfig) -> (u32, f32) {
    let font_pt = config.font_size_pt(paragraph.role);
    let width_factor = match paragraph.role {
        ParagraphRole::Body => 1.0,
        ParagraphRole::Heading(_) => BOLD_WIDTH_FACTOR,
    };

    let lines = simulate_lines(&paragraph.text(), font_pt, width_factor, config);
    let height = lines as f32 * font_pt * config.line_height
        + paragraph.spacing_after as f32 / SPACING_UNITS_PER_POINT;
    (lines, height)
}

/// Estimates line count, height, and page count for a converted document.
pub fn estimate_pages(document: &Document, config: &PageConfig) -> PageEstimate {
    let (total_lines, content_height_pt) = document
        .paragraphs
        .iter()
        .map(|p| paragraph_height(p, config))
        .fold((0_u32, 0.0_f32), |(lines, height), (l, h)| {
            (lines + l, height + h)
        });

    let page_height = config.text_height_pt();
    let pages = (content_height_pt / page_height).ceil() as u32;
    let last_page_fill = if pages == 0 {
        0.0
    } else {
        (content_height_pt - (pages - 1) as f32 * page_height) / page_height
    };

    PageEstimate {
        total_lines,
        content_height_pt,
        pages,
        last_page_fill,
        fits_single_page: pages <= 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::model::Run;

    fn config() -> PageConfig {
        a4_page_config()
    }

    // ── simulate_lines ──────────────────────────────────────────────────────

    #[test]
    fn test_empty_text_is_one_line() {
        assert_eq!(simulate_lines("", 11.0, 1.0, &config()), 1);
    }

    #[test]
    fn test_short_text_one_line() {
        assert_eq!(simulate_lines("Rust, Go, Python", 11.0, 1.0, &config()), 1);
    }

    #[test]
    fn test_long_text_wraps() {
        // ~95 characters fit per line at 11pt on A4 with 0.5" margins.
        let long = "word ".repeat(60);
        let lines = simulate_lines(&long, 11.0, 1.0, &config());
        assert!(lines >= 3, "expected wrapping, got {lines} lines");
    }

    #[test]
    fn test_line_breaks_add_lines() {
        assert_eq!(simulate_lines("Email\nPhone\nCity", 11.0, 1.0, &config()), 3);
    }

    #[test]
    fn test_overlong_word_wraps_mid_word() {
        let word = "x".repeat(300);
        assert!(simulate_lines(&word, 11.0, 1.0, &config()) >= 3);
    }

    // ── estimate_pages ──────────────────────────────────────────────────────

    #[test]
    fn test_empty_document_zero_pages() {
        let estimate = estimate_pages(&Document::default(), &config());
        assert_eq!(estimate.pages, 0);
        assert_eq!(estimate.total_lines, 0);
        assert!(estimate.fits_single_page);
    }

    #[test]
    fn test_short_resume_fits_one_page() {
        let doc = Document {
            paragraphs: vec![
                Paragraph::heading(HeadingLevel::H1, vec![Run::plain("Jane Doe")]),
                Paragraph::body(vec![Run::plain("Backend engineer.")]),
            ],
        };
        let estimate = estimate_pages(&doc, &config());
        assert_eq!(estimate.pages, 1);
        assert_eq!(estimate.total_lines, 2);
        assert!(estimate.fits_single_page);
        assert!(estimate.last_page_fill > 0.0 && estimate.last_page_fill < 0.2);
    }

    #[test]
    fn test_many_paragraphs_overflow() {
        let doc = Document {
            paragraphs: (0..80)
                .map(|i| Paragraph::body(vec![Run::plain(format!("Bullet {i}"))]))
                .collect(),
        };
        let estimate = estimate_pages(&doc, &config());
        assert!(estimate.pages >= 2);
        assert!(!estimate.fits_single_page);
        assert!(estimate.last_page_fill > 0.0 && estimate.last_page_fill <= 1.0);
    }

    #[test]
    fn test_heading_taller_than_body() {
        let heading = Paragraph::heading(HeadingLevel::H1, vec![Run::plain("Title")]);
        let body = Paragraph::body(vec![Run::plain("Title")]);
        let (_, h) = paragraph_height(&heading, &config());
        let (_, b) = paragraph_height(&body, &config());
        assert!(h > b);
    }
}
