//! Heading detection from per-glyph font metrics.

use std::collections::BTreeMap;

use crate::model::Heading;
use crate::source::Glyph;

/// Minimum ratio of line font size to page average for a size-based heading.
const SIZE_RATIO: f32 = 1.15;

/// Maximum line length (chars) for a size-based heading.
const MAX_SIZED_LEN: usize = 200;

/// Uppercase fraction above which a line counts as a case-based heading.
const UPPERCASE_RATIO: f32 = 0.6;

/// Maximum line length (chars) for a case-based heading.
const MAX_UPPER_LEN: usize = 120;

/// Detect heading lines in a page's glyph stream.
///
/// Glyphs sharing a rounded `top` form one line; a line qualifies as a
/// heading when its mean font size is well above the page average, or when
/// most of its characters are uppercase. Headings come back in top-down
/// order; a page with uniform font size and no uppercase text legitimately
/// yields none.
pub fn detect_headings(glyphs: &[Glyph]) -> Vec<Heading> {
    if glyphs.is_empty() {
        return Vec::new();
    }

    let avg_size = glyphs.iter().map(|g| g.size).sum::<f32>() / glyphs.len() as f32;

    // Line key is the rounded top; glyph order within a line is extraction order.
    let mut lines: BTreeMap<i64, Vec<&Glyph>> = BTreeMap::new();
    for glyph in glyphs {
        lines.entry(glyph.top.round() as i64).or_default().push(glyph);
    }

    let mut headings = Vec::new();
    for (line_key, line) in &lines {
        let joined: String = line.iter().map(|g| g.text.as_str()).collect();
        let line_text = joined.trim();
        if line_text.is_empty() {
            continue;
        }

        let line_size = line.iter().map(|g| g.size).sum::<f32>() / line.len() as f32;
        let len = line_text.chars().count();
        let uppercase = line_text.chars().filter(|c| c.is_uppercase()).count();
        let uppercase_ratio = uppercase as f32 / len.max(1) as f32;

        if (line_size >= avg_size * SIZE_RATIO && len < MAX_SIZED_LEN)
            || (uppercase_ratio > UPPERCASE_RATIO && len < MAX_UPPER_LEN)
        {
            headings.push(Heading::new(line_text, line_size, *line_key as f32));
        }
    }

    headings
}
