// Rich-content input: the node tree plus the two front-ends that build it.

pub mod html;
pub mod markdown;
pub mod node;

use serde::Deserialize;
use thiserror::Error;

pub use node::ContentNode;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read HTML input: {0}")]
    Html(#[from] std::io::Error),
}

/// Source markup of an export request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Rich-text editor output.
    #[default]
    Html,
    /// Generation screen output.
    Markdown,
}

impl ContentFormat {
    /// Parses `source` into a content tree according to this format.
    pub fn parse(self, source: &str) -> Result<ContentNode, ContentError> {
        match self {
            ContentFormat::Html => html::parse_html(source),
            ContentFormat::Markdown => Ok(markdown::parse_markdown(source)),
        }
    }
}
