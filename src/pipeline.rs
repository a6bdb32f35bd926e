//! Pipeline orchestration: collaborator sources in, document record out.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::analyze::{
    assemble_page, detect_headings, map_sections, reconstruct_paragraphs, resolve_tables,
};
use crate::assets::persist_page_images;
use crate::error::Result;
use crate::model::{DocumentRecord, Heading, VisualAsset};
use crate::options::PipelineOptions;
use crate::source::{ImageSource, LayoutSource, TableStrategy};

/// The structural-reconstruction pipeline.
///
/// Owns the collaborator sources and walks the document page by page,
/// assembling one [`PageRecord`](crate::model::PageRecord) per page —
/// including pages with no content. Per-page collaborator failures degrade
/// to empty results with a logged diagnostic; only an unreadable source
/// aborts the run.
///
/// Processing is single-threaded and synchronous. The pipeline holds no
/// process-wide state, so independent instances can run concurrently as long
/// as they write assets to different directories (or process different
/// documents — filenames are page- and index-derived and cannot collide
/// within one document).
pub struct Pipeline {
    layout: Box<dyn LayoutSource>,
    images: Option<Box<dyn ImageSource>>,
    primary_tables: Box<dyn TableStrategy>,
    alternate_tables: Option<Box<dyn TableStrategy>>,
    options: PipelineOptions,
}

impl Pipeline {
    /// Create a pipeline from the required sources.
    pub fn new(layout: Box<dyn LayoutSource>, primary_tables: Box<dyn TableStrategy>) -> Self {
        Self {
            layout,
            images: None,
            primary_tables,
            alternate_tables: None,
            options: PipelineOptions::default(),
        }
    }

    /// Attach a visual-asset source.
    pub fn with_images(mut self, images: Box<dyn ImageSource>) -> Self {
        self.images = Some(images);
        self
    }

    /// Attach an alternate table strategy.
    pub fn with_alternate_tables(mut self, strategy: Box<dyn TableStrategy>) -> Self {
        self.alternate_tables = Some(strategy);
        self
    }

    /// Replace the pipeline options.
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the pipeline and assemble the document record.
    ///
    /// Pages are processed in ascending page-number order; no page is
    /// skipped, even when its content comes back empty.
    pub fn run(&self) -> Result<DocumentRecord> {
        let page_count = self.layout.page_count()?;
        log::debug!("reconstructing {} page(s)", page_count);

        let mut assets_by_page = self.collect_assets();

        let mut document = DocumentRecord::new();
        for page in 1..=page_count {
            let headings = self.page_headings(page);
            let paragraphs = reconstruct_paragraphs(&self.page_text(page));
            log::debug!(
                "page {}: {} heading(s), {} paragraph(s)",
                page,
                headings.len(),
                paragraphs.len()
            );

            let text = map_sections(&headings, paragraphs);
            let tables = resolve_tables(
                page,
                self.primary_tables.as_ref(),
                self.alternate_tables.as_deref(),
                self.options.prefer_alternate_tables,
            );
            let assets = assets_by_page.remove(&page).unwrap_or_default();

            document.add_page(assemble_page(page, text, tables, assets));
        }

        Ok(document)
    }

    /// Detect headings for a page, sorted by vertical position.
    fn page_headings(&self, page: u32) -> Vec<Heading> {
        let mut headings = match self.layout.glyphs(page) {
            Ok(glyphs) => detect_headings(&glyphs),
            Err(e) => {
                log::warn!("glyph access failed on page {}: {}", page, e);
                Vec::new()
            }
        };
        headings.sort_by(|a, b| a.top.partial_cmp(&b.top).unwrap_or(Ordering::Equal));
        headings
    }

    /// Extracted text for a page; failures degrade to an empty string.
    fn page_text(&self, page: u32) -> String {
        match self.layout.text(page) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("text extraction failed on page {}: {}", page, e);
                String::new()
            }
        }
    }

    /// Persist and classify all raw images up front, keyed by page.
    fn collect_assets(&self) -> BTreeMap<u32, Vec<VisualAsset>> {
        let source = match &self.images {
            Some(source) => source,
            None => return BTreeMap::new(),
        };

        let raw = match source.images() {
            Ok(map) => map,
            Err(e) => {
                log::warn!("image extraction failed: {}", e);
                return BTreeMap::new();
            }
        };

        raw.into_iter()
            .map(|(page, images)| {
                (
                    page,
                    persist_page_images(&self.options.asset_dir, page, images),
                )
            })
            .collect()
    }
}
