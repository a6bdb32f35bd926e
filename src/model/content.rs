//! Tagged content items emitted into a page record.

use serde::{Deserialize, Serialize};

use super::{AssetKind, TableData, VisualAsset};

/// One tagged unit of page content.
///
/// Serialized with an inline `type` tag and flat fields, so a paragraph comes
/// out as `{"type": "paragraph", "section": …, "sub_section": …, "text": …}`.
/// The optional `section` is a reference to a heading's text, not an owning
/// relationship; the flat list with nullable section is deliberate and must
/// not grow into a nested tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A reconstructed body paragraph.
    Paragraph {
        /// Heading text of the owning section, if any
        section: Option<String>,
        /// Reserved for nested sections; always null today
        sub_section: Option<String>,
        /// Paragraph text
        text: String,
    },

    /// An extracted table.
    Table {
        /// Heading text of the owning section, if any
        section: Option<String>,
        /// Reserved for a generated caption; always null today
        description: Option<String>,
        /// Rows of string cells; a missing source cell is an empty string
        table_data: Vec<Vec<String>>,
    },

    /// A raster image at or below the chart-area threshold.
    Image {
        /// Heading text of the owning section, if any
        section: Option<String>,
        /// Reserved for a generated caption; always null today
        description: Option<String>,
        /// Path the raw bytes were persisted to
        image_path: String,
        /// Width in pixels, when the extractor reported it
        width: Option<u32>,
        /// Height in pixels, when the extractor reported it
        height: Option<u32>,
    },

    /// A raster image large enough to be classified as a chart.
    Chart {
        /// Heading text of the owning section, if any
        section: Option<String>,
        /// Reserved for a generated caption; always null today
        description: Option<String>,
        /// Path the raw bytes were persisted to
        image_path: String,
        /// Width in pixels, when the extractor reported it
        width: Option<u32>,
        /// Height in pixels, when the extractor reported it
        height: Option<u32>,
    },
}

impl ContentItem {
    /// Build a paragraph item.
    pub fn paragraph(text: impl Into<String>, section: Option<String>) -> Self {
        ContentItem::Paragraph {
            section,
            sub_section: None,
            text: text.into(),
        }
    }

    /// Build a table item.
    pub fn table(table: TableData) -> Self {
        ContentItem::Table {
            section: None,
            description: None,
            table_data: table.rows,
        }
    }

    /// Build an image or chart item from a classified visual asset.
    pub fn visual(asset: &VisualAsset) -> Self {
        match asset.kind {
            AssetKind::Image => ContentItem::Image {
                section: None,
                description: None,
                image_path: asset.path.clone(),
                width: asset.width,
                height: asset.height,
            },
            AssetKind::Chart => ContentItem::Chart {
                section: None,
                description: None,
                image_path: asset.path.clone(),
                width: asset.width,
                height: asset.height,
            },
        }
    }

    /// Check if this item is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, ContentItem::Paragraph { .. })
    }

    /// Check if this item is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, ContentItem::Table { .. })
    }

    /// Check if this item is a visual asset (image or chart).
    pub fn is_visual(&self) -> bool {
        matches!(self, ContentItem::Image { .. } | ContentItem::Chart { .. })
    }

    /// Get the section reference, if any.
    pub fn section(&self) -> Option<&str> {
        match self {
            ContentItem::Paragraph { section, .. }
            | ContentItem::Table { section, .. }
            | ContentItem::Image { section, .. }
            | ContentItem::Chart { section, .. } => section.as_deref(),
        }
    }
}
