// Export: serializers over the converted document model, plus the HTTP surface.
// DOCX packing is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod docx;
pub mod filename;
pub mod handlers;
pub mod layout;

use thiserror::Error;

pub use layout::a4_page_config;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to pack DOCX: {0}")]
    Docx(String),
}
