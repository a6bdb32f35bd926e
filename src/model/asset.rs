//! Visual asset types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of an extracted raster image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Ordinary raster image; the default when dimensions are unknown
    #[default]
    Image,
    /// Large raster, assumed to be a rendered chart
    Chart,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Chart => write!(f, "chart"),
        }
    }
}

/// An extracted raster image, persisted to disk and classified.
///
/// One per extracted image; independent across pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualAsset {
    /// Path the raw bytes were written to
    pub path: String,

    /// Width in pixels, when the extractor reported it
    pub width: Option<u32>,

    /// Height in pixels, when the extractor reported it
    pub height: Option<u32>,

    /// Source object id, opaque to this crate
    pub xref: u32,

    /// Image/chart classification
    pub kind: AssetKind,
}

impl VisualAsset {
    /// Pixel area, when both dimensions are known.
    pub fn pixel_area(&self) -> Option<u64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(u64::from(w) * u64::from(h)),
            _ => None,
        }
    }

    /// Check if this asset was classified as a chart.
    pub fn is_chart(&self) -> bool {
        self.kind == AssetKind::Chart
    }
}
