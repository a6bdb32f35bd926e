//! Structured document model types.
//!
//! These are the output side of the pipeline: everything here derives serde
//! traits with field order fixed by declaration, so serialization is
//! deterministic for deterministic input.

mod asset;
mod content;
mod document;
mod section;
mod table;

pub use asset::{AssetKind, VisualAsset};
pub use content::ContentItem;
pub use document::{DocumentRecord, PageRecord};
pub use section::{Heading, Section};
pub use table::TableData;
