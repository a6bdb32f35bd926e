//! Collaborator interfaces supplying raw page primitives.
//!
//! Low-level PDF decoding lives behind these traits: any backend that can
//! produce positioned glyphs, flat page text, raster image bytes and raw
//! table rows can drive the pipeline. The pipeline never touches the PDF
//! itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Extraction, Result};

/// A positioned glyph produced by a character-layout collaborator.
///
/// Scoped to one page; `text` is usually a single character but may carry a
/// longer cluster when the extractor merges glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Glyph text
    pub text: String,

    /// Font size in points
    pub size: f32,

    /// Vertical position (top edge)
    pub top: f32,
}

impl Glyph {
    /// Create a new glyph.
    pub fn new(text: impl Into<String>, size: f32, top: f32) -> Self {
        Self {
            text: text.into(),
            size,
            top,
        }
    }
}

/// A raw extracted image before persistence and classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    /// Undecoded image bytes
    pub data: Vec<u8>,

    /// Width in pixels, if the extractor reported it
    pub width: Option<u32>,

    /// Height in pixels, if the extractor reported it
    pub height: Option<u32>,

    /// Source object id, opaque to this crate
    pub xref: u32,
}

/// Raw table rows as produced by a strategy; `None` marks a missing cell.
pub type RawRows = Vec<Vec<Option<String>>>;

/// Per-page glyph and text access.
pub trait LayoutSource {
    /// Total number of pages.
    ///
    /// Failure here means the source document itself is unreadable and
    /// aborts the pipeline; map backend errors to
    /// [`Error::UnreadableSource`](crate::Error::UnreadableSource).
    fn page_count(&self) -> Result<u32>;

    /// Positioned glyphs for a page (1-indexed), in extraction order.
    ///
    /// A failure degrades to "no headings detected" for that page.
    fn glyphs(&self, page: u32) -> Result<Vec<Glyph>>;

    /// Full extracted text for a page; an empty string is permitted.
    ///
    /// A failure degrades to "no paragraphs" for that page.
    fn text(&self, page: u32) -> Result<String>;
}

/// Document-level raster image access.
pub trait ImageSource {
    /// Raw images keyed by 1-based page number, in extraction order.
    fn images(&self) -> Result<BTreeMap<u32, Vec<RawImage>>>;
}

/// One table-extraction strategy, callable per page.
///
/// Strategies never propagate failures to the pipeline; they report them as
/// [`Extraction::Failed`] and the resolver treats that as zero tables.
pub trait TableStrategy {
    /// Strategy name used in diagnostics.
    fn name(&self) -> &str;

    /// Extract raw tables from a page (1-indexed).
    fn extract(&self, page: u32) -> Extraction<Vec<RawRows>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_new() {
        let glyph = Glyph::new("A", 12.0, 72.5);
        assert_eq!(glyph.text, "A");
        assert_eq!(glyph.size, 12.0);
        assert_eq!(glyph.top, 72.5);
    }

    #[test]
    fn test_glyph_roundtrip() {
        let glyph = Glyph::new("서", 10.5, 40.0);
        let json = serde_json::to_string(&glyph).unwrap();
        let back: Glyph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, glyph);
    }
}
