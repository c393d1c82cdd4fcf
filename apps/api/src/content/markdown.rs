//! Generated Markdown → `ContentNode` tree.
//!
//! The generation screen shows Markdown; exporting it goes through the same converter
//! as editor HTML. pulldown-cmark events are folded into a tree with an explicit
//! frame stack.

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::content::node::{ContentNode, Emphasis, HeadingLevel};

/// Parses Markdown into a content tree rooted at an untagged `Container`.
///
/// Ordered-list start numbers are ignored (numbering always restarts at 1), raw HTML
/// is dropped, and headings deeper than level 3 become tagged containers.
pub fn parse_markdown(markdown: &str) -> ContentNode {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(tag) => builder.open(frame_kind(&tag)),
            Event::End(_) => builder.close(),
            Event::Text(text) | Event::Code(text) => {
                builder.push(ContentNode::text(text.into_string()))
            }
            Event::SoftBreak => builder.soft_break(),
            Event::HardBreak | Event::Rule => builder.push(ContentNode::LineBreak),
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                builder.push(ContentNode::text(marker))
            }
            _ => {}
        }
    }

    builder.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Tree builder
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
enum FrameKind {
    Root,
    Heading(HeadingLevel),
    Paragraph,
    UnorderedList,
    OrderedList,
    Item,
    Emphasis(Emphasis),
    Container(String),
    /// Raw HTML blocks; their content is discarded on close.
    Dropped,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    children: Vec<ContentNode>,
}

struct TreeBuilder {
    stack: Vec<Frame>,
    /// Set by a soft break; the space is glued onto the next text leaf.
    pending_space: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame {
                kind: FrameKind::Root,
                children: Vec::new(),
            }],
            pending_space: false,
        }
    }

    fn open(&mut self, kind: FrameKind) {
        self.stack.push(Frame {
            kind,
            children: Vec::new(),
        });
    }

    fn push(&mut self, mut node: ContentNode) {
        if let ContentNode::Text { text, .. } = &mut node {
            if std::mem::take(&mut self.pending_space) {
                text.insert(0, ' ');
            }
        }
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(node);
        }
    }

    /// A wrapped source line. Appends a space to the preceding text leaf in the
    /// current frame, or defers it to the next text leaf when the previous child
    /// is not text (e.g. `**Bold**` followed by a newline).
    fn soft_break(&mut self) {
        if let Some(ContentNode::Text { text, .. }) =
            self.stack.last_mut().and_then(|f| f.children.last_mut())
        {
            text.push(' ');
            return;
        }
        self.pending_space = true;
    }

    /// Closes the innermost open frame. The root frame is never closed here.
    fn close(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        self.pending_space = false;
        if let Some(frame) = self.stack.pop() {
            if let Some(node) = build_node(frame) {
                self.push(node);
            }
        }
    }

    fn finish(mut self) -> ContentNode {
        while self.stack.len() > 1 {
            self.close();
        }
        let children = self.stack.pop().map(|f| f.children).unwrap_or_default();
        ContentNode::root(children)
    }
}

fn frame_kind(tag: &Tag) -> FrameKind {
    match tag {
        Tag::Heading { level, .. } => {
            let number = *level as u8;
            match HeadingLevel::from_number(number) {
                Some(level) => FrameKind::Heading(level),
                None => FrameKind::Container(format!("h{number}")),
            }
        }
        Tag::Paragraph | Tag::CodeBlock(_) => FrameKind::Paragraph,
        Tag::HtmlBlock => FrameKind::Dropped,
        Tag::List(Some(_)) => FrameKind::OrderedList,
        Tag::List(None) => FrameKind::UnorderedList,
        Tag::Item => FrameKind::Item,
        Tag::Strong => FrameKind::Emphasis(Emphasis::Bold),
        Tag::Emphasis => FrameKind::Emphasis(Emphasis::Italic),
        Tag::BlockQuote(_) => FrameKind::Container("blockquote".to_string()),
        Tag::Table(_) => FrameKind::Container("table".to_string()),
        Tag::Link { .. } => FrameKind::Container("a".to_string()),
        _ => FrameKind::Container("block".to_string()),
    }
}

fn build_node(frame: Frame) -> Option<ContentNode> {
    let children = frame.children;
    let node = match frame.kind {
        FrameKind::Root => ContentNode::root(children),
        FrameKind::Heading(level) => ContentNode::heading(level, children),
        FrameKind::Paragraph => ContentNode::Paragraph(children),
        FrameKind::UnorderedList => ContentNode::UnorderedList(children),
        FrameKind::OrderedList => ContentNode::OrderedList(children),
        FrameKind::Item => ContentNode::ListItem(children),
        FrameKind::Emphasis(mark) => ContentNode::emphasis(mark, children),
        FrameKind::Container(tag) => ContentNode::container(tag, children),
        FrameKind::Dropped => return None,
    };
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    fn body(markdown: &str) -> Vec<ContentNode> {
        match parse_markdown(markdown) {
            ContentNode::Container { tag: None, children } => children,
            other => panic!("expected untagged root container, got {other:?}"),
        }
    }

    #[test]
    fn test_heading_levels() {
        let nodes = body("# Name\n\n## Skills\n\n### Languages\n");
        assert_eq!(
            nodes,
            vec![
                ContentNode::heading(HeadingLevel::H1, vec![ContentNode::text("Name")]),
                ContentNode::heading(HeadingLevel::H2, vec![ContentNode::text("Skills")]),
                ContentNode::heading(HeadingLevel::H3, vec![ContentNode::text("Languages")]),
            ]
        );
    }

    #[test]
    fn test_deep_heading_is_container() {
        let nodes = body("#### Footnote\n");
        assert_eq!(
            nodes,
            vec![ContentNode::container(
                "h4",
                vec![ContentNode::text("Footnote")]
            )]
        );
    }

    #[test]
    fn test_strong_and_emphasis() {
        let nodes = body("**Bold** and *soft*\n");
        assert_eq!(
            nodes,
            vec![ContentNode::Paragraph(vec![
                ContentNode::emphasis(Emphasis::Bold, vec![ContentNode::text("Bold")]),
                ContentNode::text(" and "),
                ContentNode::emphasis(Emphasis::Italic, vec![ContentNode::text("soft")]),
            ])]
        );
    }

    #[test]
    fn test_tight_lists() {
        assert_eq!(
            body("- Python\n- Go\n"),
            vec![ContentNode::UnorderedList(vec![
                ContentNode::ListItem(vec![ContentNode::text("Python")]),
                ContentNode::ListItem(vec![ContentNode::text("Go")]),
            ])]
        );
        assert_eq!(
            body("1. A\n2. B\n"),
            vec![ContentNode::OrderedList(vec![
                ContentNode::ListItem(vec![ContentNode::text("A")]),
                ContentNode::ListItem(vec![ContentNode::text("B")]),
            ])]
        );
    }

    #[test]
    fn test_ordered_start_number_ignored() {
        let nodes = body("7. Seventh\n");
        assert!(matches!(nodes[0], ContentNode::OrderedList(_)));
    }

    #[test]
    fn test_soft_break_becomes_space() {
        let nodes = body("line one\nline two\n");
        assert_eq!(
            nodes,
            vec![ContentNode::Paragraph(vec![
                ContentNode::text("line one "),
                ContentNode::text("line two"),
            ])]
        );
    }

    #[test]
    fn test_wrapped_lines_keep_word_spacing() {
        let doc = convert(&parse_markdown("Led the backend\nteam of five\n"));
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.paragraphs[0].text(), "Led the backend team of five");
    }

    #[test]
    fn test_soft_break_after_emphasis_keeps_space() {
        let doc = convert(&parse_markdown("**Bold**\nplain\n"));
        let runs = &doc.paragraphs[0].runs;
        assert_eq!(doc.paragraphs[0].text(), "Bold plain");
        assert!(runs[0].bold);
        assert_eq!(runs[1].text, " plain");
        assert!(!runs[1].bold);
    }

    #[test]
    fn test_soft_break_inside_list_item() {
        let doc = convert(&parse_markdown("- Shipped the\n  billing rewrite\n"));
        assert_eq!(doc.paragraphs[0].text(), "• Shipped the billing rewrite");
    }

    #[test]
    fn test_rule_is_line_break() {
        let nodes = body("above\n\n---\n\nbelow\n");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1], ContentNode::LineBreak);
    }

    #[test]
    fn test_raw_html_dropped() {
        let nodes = body("<div>raw</div>\n\ntext\n");
        assert_eq!(
            nodes,
            vec![ContentNode::Paragraph(vec![ContentNode::text("text")])]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(body("").is_empty());
    }
}
