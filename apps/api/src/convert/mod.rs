// Content tree → document model conversion.
// Pure and synchronous; callers own parsing before and serialization after.

pub mod converter;
pub mod model;

pub use converter::convert;
pub use model::Document;
