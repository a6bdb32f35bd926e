//! Persistence of extracted raster images.

use std::fs;
use std::path::Path;

use crate::analyze::classify;
use crate::model::VisualAsset;
use crate::source::RawImage;

/// Write a page's raw images into `dir` and build classified visual assets.
///
/// Filenames are derived from the page number and image index
/// (`p{page}_img_{index}.{ext}`), so no two writes within a document ever
/// collide. Assets that cannot be written are skipped with a diagnostic;
/// output order follows extraction order.
pub fn persist_page_images(dir: &Path, page: u32, images: Vec<RawImage>) -> Vec<VisualAsset> {
    if images.is_empty() {
        return Vec::new();
    }

    if let Err(e) = fs::create_dir_all(dir) {
        log::warn!(
            "cannot create asset directory {}: {}; dropping {} image(s) on page {}",
            dir.display(),
            e,
            images.len(),
            page
        );
        return Vec::new();
    }

    let mut assets = Vec::new();
    for (index, image) in images.into_iter().enumerate() {
        if image.data.is_empty() {
            log::warn!("skipping empty image {} on page {}", index, page);
            continue;
        }

        let filename = format!("p{}_img_{}.{}", page, index, detect_extension(&image.data));
        let path = dir.join(filename);
        if let Err(e) = fs::write(&path, &image.data) {
            log::warn!("failed to write {}: {}", path.display(), e);
            continue;
        }

        assets.push(VisualAsset {
            path: path.to_string_lossy().into_owned(),
            width: image.width,
            height: image.height,
            xref: image.xref,
            kind: classify(image.width, image.height),
        });
    }

    assets
}

/// Sniff a file extension from image magic bytes.
fn detect_extension(data: &[u8]) -> &'static str {
    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "jpg";
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "png";
    }

    // GIF: GIF87a or GIF89a
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return "gif";
    }

    // TIFF: little- or big-endian byte order mark
    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
        return "tiff";
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return "bmp";
    }

    // WEBP: RIFF....WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return "webp";
    }

    "bin"
}
