//! Image/chart classification by pixel area.

use crate::model::AssetKind;

/// Pixel area above which a raster is assumed to be a rendered chart.
const CHART_AREA_THRESHOLD: u64 = 150_000;

/// Classify a raster by pixel area.
///
/// Missing dimensions always classify as an image, and the threshold is
/// strict: an area of exactly 150000 is still an image.
pub fn classify(width: Option<u32>, height: Option<u32>) -> AssetKind {
    match (width, height) {
        (Some(w), Some(h)) if u64::from(w) * u64::from(h) > CHART_AREA_THRESHOLD => {
            AssetKind::Chart
        }
        _ => AssetKind::Image,
    }
}
