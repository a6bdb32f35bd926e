//! Page assembly: merging text content, tables and visual assets.

use crate::model::{ContentItem, PageRecord, Section, TableData, VisualAsset};

use super::TextContent;

/// Assemble one page record from the per-page analysis results.
///
/// Content order is fixed: paragraphs first (grouped by section when
/// sections exist), then tables, then visual assets in extraction order.
/// This is a deliberate simplification of reading order, matched by the
/// downstream consumers of the record.
pub fn assemble_page(
    page_number: u32,
    text: TextContent,
    tables: Vec<TableData>,
    assets: Vec<VisualAsset>,
) -> PageRecord {
    let mut page = PageRecord::new(page_number);

    match text {
        TextContent::Sectioned(sections) => {
            for section in sections {
                let Section {
                    heading_text,
                    paragraphs,
                } = section;
                for paragraph in paragraphs {
                    page.add(ContentItem::paragraph(
                        paragraph,
                        Some(heading_text.clone()),
                    ));
                }
            }
        }
        TextContent::Flat(paragraphs) => {
            for paragraph in paragraphs {
                page.add(ContentItem::paragraph(paragraph, None));
            }
        }
    }

    for table in tables {
        page.add(ContentItem::table(table));
    }
    for asset in assets {
        page.add(ContentItem::visual(&asset));
    }

    page
}
