//! Document model → DOCX bytes.

use std::io::Cursor;

use docx_rs::{
    BreakType, Docx, LineSpacing, Paragraph as DocxParagraph, Run as DocxRun, Style, StyleType,
};
use tracing::debug;

use crate::content::node::HeadingLevel;
use crate::convert::model::{Document, Paragraph, ParagraphRole, Run, LINE_BREAK};
use crate::export::ExportError;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Heading font sizes in half-points.
const HEADING_SIZES: [(HeadingLevel, usize); 3] = [
    (HeadingLevel::H1, 32),
    (HeadingLevel::H2, 28),
    (HeadingLevel::H3, 26),
];

/// Renders a document into a packed `.docx` archive.
pub fn render_docx(document: &Document) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new();
    for (level, size) in HEADING_SIZES {
        docx = docx.add_style(heading_style(level, size));
    }

    for paragraph in &document.paragraphs {
        docx = docx.add_paragraph(build_paragraph(paragraph));
    }

    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    debug!(
        paragraphs = document.paragraphs.len(),
        bytes = buffer.len(),
        "DOCX packed"
    );
    Ok(buffer)
}

fn heading_style_id(level: HeadingLevel) -> String {
    format!("Heading{}", level.number())
}

fn heading_style(level: HeadingLevel, size: usize) -> Style {
    Style::new(&heading_style_id(level), StyleType::Paragraph)
        .name(&format!("Heading {}", level.number()))
        .size(size)
        .bold()
}

fn build_paragraph(paragraph: &Paragraph) -> DocxParagraph {
    let mut para = DocxParagraph::new()
        .line_spacing(LineSpacing::new().after(paragraph.spacing_after));

    if let ParagraphRole::Heading(level) = paragraph.role {
        para = para.style(&heading_style_id(level));
    }

    for run in &paragraph.runs {
        para = para.add_run(build_run(run));
    }
    para
}

/// Embedded newlines become soft line breaks within the run.
fn build_run(run: &Run) -> DocxRun {
    if run.is_line_break() {
        return DocxRun::new().add_break(BreakType::TextWrapping);
    }

    let mut docx_run = DocxRun::new();
    for (i, segment) in run.text.split(LINE_BREAK).enumerate() {
        if i > 0 {
            docx_run = docx_run.add_break(BreakType::TextWrapping);
        }
        if !segment.is_empty() {
            docx_run = docx_run.add_text(segment);
        }
    }

    let style = run.style();
    if style.bold {
        docx_run = docx_run.bold();
    }
    if style.italic {
        docx_run = docx_run.italic();
    }
    if style.underline {
        docx_run = docx_run.underline("single");
    }
    docx_run
}
