//! Pipeline configuration.

use std::path::PathBuf;

/// Options controlling pipeline behavior.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Directory extracted images are written to
    pub asset_dir: PathBuf,

    /// Prefer the alternate table strategy, falling back to the primary
    pub prefer_alternate_tables: bool,
}

impl PipelineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset output directory.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Prefer the alternate table strategy over the primary.
    pub fn prefer_alternate_tables(mut self, prefer: bool) -> Self {
        self.prefer_alternate_tables = prefer;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("extracted_images"),
            prefer_alternate_tables: false,
        }
    }
}
