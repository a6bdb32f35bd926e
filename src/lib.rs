//! # unlayout
//!
//! Structural reconstruction of parsed PDF page layouts.
//!
//! This library ingests a page's raw layout primitives — positioned glyphs,
//! flat extracted text, raster image bytes and raw table rows — and rebuilds
//! a structured document model: headings detected from font metrics,
//! paragraphs grouped under sections, image/chart classification by pixel
//! area, and tabular data, emitted as an ordered, page-indexed record.
//!
//! Low-level PDF decoding is out of scope. The pipeline consumes collaborator
//! traits ([`LayoutSource`], [`ImageSource`], [`TableStrategy`]) that any
//! PDF-processing backend can implement, and degrades to empty per-page
//! results when a collaborator fails; only an unreadable source aborts a run.
//!
//! ## Quick start
//!
//! ```no_run
//! use unlayout::{render, JsonFormat, Pipeline, PipelineOptions};
//! # use unlayout::{Extraction, Glyph, LayoutSource, RawRows, Result, TableStrategy};
//! # struct Backend;
//! # impl LayoutSource for Backend {
//! #     fn page_count(&self) -> Result<u32> { Ok(1) }
//! #     fn glyphs(&self, _page: u32) -> Result<Vec<Glyph>> { Ok(Vec::new()) }
//! #     fn text(&self, _page: u32) -> Result<String> { Ok(String::new()) }
//! # }
//! # struct Tables;
//! # impl TableStrategy for Tables {
//! #     fn name(&self) -> &str { "primary" }
//! #     fn extract(&self, _page: u32) -> Extraction<Vec<RawRows>> { Extraction::Complete(Vec::new()) }
//! # }
//!
//! fn main() -> unlayout::Result<()> {
//!     let doc = Pipeline::new(Box::new(Backend), Box::new(Tables))
//!         .with_options(PipelineOptions::new().with_asset_dir("assets"))
//!         .run()?;
//!
//!     println!("{}", render::to_json(&doc, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading detection**: font-size and uppercase heuristics over the
//!   glyph stream
//! - **Paragraph reconstruction**: blank-line and sentence-termination
//!   heuristics over flat text
//! - **Section mapping**: positional paragraph-to-heading distribution
//! - **Visual classification**: image vs. chart by pixel area
//! - **Table resolution**: primary/alternate strategy with fallback
//! - **Deterministic JSON**: stable key order, byte-identical reruns

pub mod analyze;
pub mod assets;
pub mod error;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Extraction, Result};
pub use model::{
    AssetKind, ContentItem, DocumentRecord, Heading, PageRecord, Section, TableData, VisualAsset,
};
pub use options::PipelineOptions;
pub use pipeline::Pipeline;
pub use render::JsonFormat;
pub use source::{Glyph, ImageSource, LayoutSource, RawImage, RawRows, TableStrategy};

/// Run the full pipeline over the required sources with default options.
///
/// Convenience wrapper around [`Pipeline::new`] + [`Pipeline::run`]; use the
/// builder directly to attach an image source or an alternate table
/// strategy.
pub fn restructure(
    layout: Box<dyn LayoutSource>,
    tables: Box<dyn TableStrategy>,
) -> Result<DocumentRecord> {
    Pipeline::new(layout, tables).run()
}

/// Run the full pipeline with custom options.
pub fn restructure_with_options(
    layout: Box<dyn LayoutSource>,
    tables: Box<dyn TableStrategy>,
    options: PipelineOptions,
) -> Result<DocumentRecord> {
    Pipeline::new(layout, tables).with_options(options).run()
}
