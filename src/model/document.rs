//! Document- and page-level record types.

use serde::{Deserialize, Serialize};

use super::ContentItem;

/// The root output record: one entry per input page, in page order.
///
/// Not mutated after assembly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Pages in ascending page-number order
    pub pages: Vec<PageRecord>,
}

impl DocumentRecord {
    /// Create an empty document record.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Get the number of pages in the record.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_number: u32) -> Option<&PageRecord> {
        if page_number == 0 {
            return None;
        }
        self.pages.get((page_number - 1) as usize)
    }

    /// Add a page to the record.
    pub fn add_page(&mut self, page: PageRecord) {
        self.pages.push(page);
    }

    /// Check whether the record has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A single page's reconstructed content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Ordered content items: paragraphs first (grouped by section when
    /// sections exist), then tables, then visual assets
    pub content: Vec<ContentItem>,
}

impl PageRecord {
    /// Create an empty page record.
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            content: Vec::new(),
        }
    }

    /// Append a content item to the page.
    pub fn add(&mut self, item: ContentItem) {
        self.content.push(item);
    }

    /// Check whether the page has any content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Count the paragraph items on the page.
    pub fn paragraph_count(&self) -> usize {
        self.content.iter().filter(|c| c.is_paragraph()).count()
    }

    /// Count the table items on the page.
    pub fn table_count(&self) -> usize {
        self.content.iter().filter(|c| c.is_table()).count()
    }
}
