//! Heuristic structural-reconstruction components.
//!
//! Each component is a pure function over page-local input returning a new
//! value; the pipeline wires them together. The heuristics are order
//! sensitive by design — tie-break order inside each function is part of the
//! output contract, not an implementation detail.

mod assemble;
mod classify;
mod heading;
mod paragraph;
mod section;
mod tables;

pub use assemble::assemble_page;
pub use classify::classify;
pub use heading::detect_headings;
pub use paragraph::reconstruct_paragraphs;
pub use section::{map_sections, TextContent};
pub use tables::resolve_tables;
