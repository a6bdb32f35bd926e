//! Heading and section types.

use serde::{Deserialize, Serialize};

/// A text line inferred to be a section title.
///
/// Derived per page from the glyph stream; callers order headings by `top`
/// ascending (reading order) before mapping sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Trimmed line text
    pub text: String,

    /// Mean font size of the line's glyphs
    pub font_size: f32,

    /// Vertical position of the line (rounded line key)
    pub top: f32,
}

impl Heading {
    /// Create a new heading.
    pub fn new(text: impl Into<String>, font_size: f32, top: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
            top,
        }
    }
}

/// A heading and the paragraphs heuristically associated with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Text of the detected heading
    pub heading_text: String,

    /// Paragraphs assigned to this section, in reading order
    pub paragraphs: Vec<String>,
}

impl Section {
    /// Create an empty section for a heading.
    pub fn new(heading_text: impl Into<String>) -> Self {
        Self {
            heading_text: heading_text.into(),
            paragraphs: Vec::new(),
        }
    }

    /// Number of paragraphs assigned to this section.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check whether the section has any paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
