//! Distribution of paragraphs across detected headings.

use crate::model::{Heading, Section};

/// Text content of a page after section mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    /// Paragraphs grouped under detected headings
    Sectioned(Vec<Section>),
    /// No headings detected; flat paragraphs without section references
    Flat(Vec<String>),
}

impl TextContent {
    /// Total number of paragraphs regardless of grouping.
    pub fn paragraph_count(&self) -> usize {
        match self {
            TextContent::Sectioned(sections) => {
                sections.iter().map(Section::paragraph_count).sum()
            }
            TextContent::Flat(paragraphs) => paragraphs.len(),
        }
    }
}

/// Distribute paragraphs across headings to form ordered sections.
///
/// Headings must already be sorted by `top`. Each section receives one
/// paragraph front-to-back; everything left over is appended to the last
/// section. The distribution is positional, not content-aware — a known
/// limitation kept for output compatibility, not something to fix here.
///
/// With no headings the paragraphs come back flat and the assembler emits
/// them without section references.
pub fn map_sections(headings: &[Heading], paragraphs: Vec<String>) -> TextContent {
    if headings.is_empty() {
        return TextContent::Flat(paragraphs);
    }

    let mut sections: Vec<Section> = headings
        .iter()
        .map(|h| Section::new(h.text.clone()))
        .collect();

    let mut remaining = paragraphs.into_iter();
    for section in sections.iter_mut() {
        match remaining.next() {
            Some(paragraph) => section.paragraphs.push(paragraph),
            None => break,
        }
    }
    if let Some(last) = sections.last_mut() {
        last.paragraphs.extend(remaining);
    }

    TextContent::Sectioned(sections)
}
